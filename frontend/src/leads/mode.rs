use serde::{Deserialize, Serialize};

/// The two lead-acquisition workflows offered by the request form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Search,
    Lists,
}

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

/// Static per-mode data. Plain lookup, no behaviour hangs off it.
pub struct ModeConfig {
    pub tab_label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub max_leads: u32,
    pub price_per_thousand: u32,
    pub requires_credential: bool,
    pub steps: &'static [Step],
}

const SEARCH: ModeConfig = ModeConfig {
    tab_label: "Get Leads with Search",
    title: "Get Leads from Search",
    description: "Extract leads directly from an Apollo.io search with your own filters.",
    max_leads: 50,
    price_per_thousand: 3,
    requires_credential: false,
    steps: &[
        Step {
            title: "Set up search filters",
            description: "Use Apollo.io search filters to define your target audience and copy the search URL.",
        },
        Step {
            title: "Make payment",
            description: "Complete the payment process through our secure payment gateway.",
        },
        Step {
            title: "Receive leads",
            description: "Your leads will be delivered to your email within 24 hours.",
        },
    ],
};

const LISTS: ModeConfig = ModeConfig {
    tab_label: "Get Leads with Lists",
    title: "Get Leads from Lists",
    description: "Extract leads from your saved Apollo.io lists quickly and efficiently.",
    max_leads: 10,
    price_per_thousand: 3,
    requires_credential: true,
    steps: &[
        Step {
            title: "Prepare Apollo List",
            description: "Go to Apollo.io, select your list and copy the list URL.",
        },
        Step {
            title: "Get Cred ID",
            description: "Log into the Apollo account you want to extract from, run the ActionLeads extension in a new tab, click \"Start\" and copy the ID it returns. Installing the extension is a one-time task.",
        },
        Step {
            title: "Complete Payment",
            description: "Fill out the form, make the payment, and wait for your data.",
        },
    ],
};

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Search, Mode::Lists];

    pub fn config(self) -> &'static ModeConfig {
        match self {
            Mode::Search => &SEARCH,
            Mode::Lists => &LISTS,
        }
    }

    /// Upper bound for the lead slider, in thousands.
    pub fn cap(self) -> u32 {
        self.config().max_leads
    }

    pub fn other(self) -> Mode {
        match self {
            Mode::Search => Mode::Lists,
            Mode::Lists => Mode::Search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_match_mode() {
        assert_eq!(Mode::Search.cap(), 50);
        assert_eq!(Mode::Lists.cap(), 10);
    }

    #[test]
    fn only_lists_needs_a_credential() {
        assert!(!Mode::Search.config().requires_credential);
        assert!(Mode::Lists.config().requires_credential);
    }

    #[test]
    fn other_flips_between_modes() {
        for mode in Mode::ALL {
            assert_ne!(mode.other(), mode);
            assert_eq!(mode.other().other(), mode);
        }
    }
}
