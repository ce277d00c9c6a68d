// Short random identifiers for records created at runtime
use rand::distributions::Alphanumeric;
use rand::Rng;

const ID_LEN: usize = 9;

pub fn short_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

pub fn prefixed_id(prefix: &str) -> String {
    format!("{}{}", prefix, short_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_shape() {
        let id = short_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(prefixed_id("t").starts_with('t'));
    }
}
