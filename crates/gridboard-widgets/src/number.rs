#![forbid(unsafe_code)]

//! Plain numbered box, the fallback view.

/// Shows the widget number and a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberBox {
    /// Widget number shown in the box.
    pub number: i64,
}

impl NumberBox {
    #[must_use]
    pub const fn new(number: i64) -> Self {
        Self { number }
    }

    #[must_use]
    pub fn caption(&self) -> String {
        format!("Widget #{}", self.number)
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![self.number.to_string(), self.caption()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines() {
        assert_eq!(NumberBox::new(11).lines(), ["11", "Widget #11"]);
        assert_eq!(NumberBox::new(0).caption(), "Widget #0");
    }
}
