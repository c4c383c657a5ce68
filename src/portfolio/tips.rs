pub static SECURITY_TIPS: [&str; 5] = [
    "Always use strong, unique passwords for each account.",
    "Enable two-factor authentication whenever possible.",
    "Keep your software and operating systems up to date.",
    "Be cautious of phishing emails and suspicious links.",
    "Regularly back up your important data.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipState {
    #[default]
    Hidden,
    Visible {
        text: &'static str,
    },
}

impl TipState {
    pub fn is_visible(&self) -> bool {
        matches!(self, TipState::Visible { .. })
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            TipState::Hidden => None,
            TipState::Visible { text } => Some(text),
        }
    }
}

/// Source of tip indices. Implementations should pick uniformly over `0..len`.
pub trait TipPicker {
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> TipPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

pub(crate) fn choose_tip(picker: &mut dyn TipPicker) -> &'static str {
    let i = picker.pick(SECURITY_TIPS.len()) % SECURITY_TIPS.len();
    SECURITY_TIPS[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_picker() {
        let mut next = 0;
        let mut picker = move |len: usize| {
            let i = next % len;
            next += 1;
            i
        };
        let picked = (0..6).map(|_| choose_tip(&mut picker)).collect::<Vec<_>>();
        assert_eq!(picked[..5], SECURITY_TIPS[..]);
        assert_eq!(picked[5], SECURITY_TIPS[0]);
    }

    #[test]
    fn test_out_of_range_pick_wraps() {
        let mut picker = |_: usize| 7usize;
        assert_eq!(choose_tip(&mut picker), SECURITY_TIPS[2]);
    }

    #[test]
    fn test_tip_state_accessors() {
        assert!(!TipState::Hidden.is_visible());
        assert_eq!(TipState::Hidden.text(), None);
        let shown = TipState::Visible {
            text: SECURITY_TIPS[1],
        };
        assert!(shown.is_visible());
        assert_eq!(shown.text(), Some(SECURITY_TIPS[1]));
    }
}
