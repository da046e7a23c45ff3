use rand::{Rng, distr::Alphanumeric};

use crate::consts::INVITATION_ID_LEN;

/// Random alphanumeric token used as both storage key suffix and share link.
pub fn generate_invitation_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(INVITATION_ID_LEN)
        .map(char::from)
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_url_safe_and_distinct() {
        let first = generate_invitation_id();
        let second = generate_invitation_id();

        assert_eq!(first.len(), INVITATION_ID_LEN);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }
}
