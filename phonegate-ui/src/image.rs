use std::collections::HashMap;

use iced::widget::image::Handle;
use phonegate::country::Flag;

/// Flag images downloaded so far, keyed by flag.
#[derive(Debug, Clone, Default)]
pub struct FlagImages(HashMap<Flag, Handle>);

impl FlagImages {
    pub fn insert(&mut self, flag: Flag, bytes: Vec<u8>) {
        self.0.insert(flag, Handle::from_bytes(bytes));
    }

    pub fn contains(&self, flag: &Flag) -> bool {
        self.0.contains_key(flag)
    }

    pub fn get(&self, region_code: &str) -> Option<&Handle> {
        self.0.get(&Flag::new(region_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_region_code_case() {
        let mut flags = FlagImages::default();
        assert!(!flags.contains(&Flag::new("fr")));
        flags.insert(Flag::new("FR"), vec![0u8; 4]);
        assert!(flags.contains(&Flag::new("fr")));
        assert!(flags.get("FR").is_some());
        assert!(flags.get("fr").is_some());
        assert!(flags.get("DE").is_none());
        assert!(!flags.contains(&Flag::new("de")));
    }
}
