use std::fmt;

/// One visibility rule attached to a control.
///
/// The hider owns whatever context its expression needs through its
/// evaluator closure. `hide_when_expression` is carried for display and
/// debugging only; nothing in this crate interprets it.
pub struct Hider {
    pub to_hide: bool,
    pub hide_when_expression: String,
    evaluator: Box<dyn FnMut() -> bool>,
}

impl Hider {
    pub fn new(expression: impl Into<String>, evaluator: impl FnMut() -> bool + 'static) -> Self {
        Self {
            to_hide: false,
            hide_when_expression: expression.into(),
            evaluator: Box::new(evaluator),
        }
    }

    /// Set the last-evaluated result, as if the hider had already run.
    pub fn with_to_hide(mut self, to_hide: bool) -> Self {
        self.to_hide = to_hide;
        self
    }

    pub fn re_evaluate(&mut self) {
        self.to_hide = (self.evaluator)();
    }
}

impl fmt::Debug for Hider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hider")
            .field("to_hide", &self.to_hide)
            .field("hide_when_expression", &self.hide_when_expression)
            .finish_non_exhaustive()
    }
}
