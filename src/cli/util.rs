const VISIBLE_PREFIX: usize = 8;

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    if key.chars().count() <= VISIBLE_PREFIX {
        return "***".to_string();
    }

    let visible = key.chars().take(VISIBLE_PREFIX).collect::<String>();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::mask_api_key;

    #[test]
    fn masks_all_but_prefix() {
        assert_eq!(mask_api_key(""), "(not set)");
        assert_eq!(mask_api_key("gsk_1234567890abcdef"), "gsk_1234***");
    }

    #[test]
    fn short_keys_are_fully_hidden() {
        assert_eq!(mask_api_key("short"), "***");
        assert_eq!(mask_api_key("gsk_1234"), "***");
        assert_eq!(mask_api_key("gsk_12345"), "gsk_1234***");
    }
}
