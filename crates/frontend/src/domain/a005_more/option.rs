/// Entries of the More screen, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoreOption {
    Profile,
    LogOut,
}

impl MoreOption {
    pub fn all() -> &'static [MoreOption] {
        &[MoreOption::Profile, MoreOption::LogOut]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoreOption::Profile => "Profile",
            MoreOption::LogOut => "Log Out",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MoreOption::Profile => "user",
            MoreOption::LogOut => "sign-out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let labels: Vec<&str> = MoreOption::all().iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["Profile", "Log Out"]);
        assert_eq!(MoreOption::LogOut.icon(), "sign-out");
    }
}
