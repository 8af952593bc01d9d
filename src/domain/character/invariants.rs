use super::entity::Character;
use crate::domain::{DomainError, DomainResult};

/// Validates the invariants a character must satisfy before it is shown or stored
pub fn validate_character(character: &Character) -> DomainResult<()> {
    if character.id == 0 {
        return Err(DomainError::InvariantViolation(
            "Character id must be positive".to_string(),
        ));
    }
    if character.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Character {} has an empty name",
            character.id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::test_support::character;

    #[test]
    fn test_valid_character() {
        assert!(validate_character(&character(1, "Rick Sanchez")).is_ok());
    }

    #[test]
    fn test_zero_id_fails() {
        assert!(validate_character(&character(0, "Nobody")).is_err());
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(validate_character(&character(7, "  ")).is_err());
    }
}
