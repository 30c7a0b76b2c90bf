use sea_orm::{DbErr, SqlErr};

/// Storage-level constraint a failed write ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique,
    ForeignKey,
}

/// Classifies a write failure. Driver errors are matched structurally; the
/// message fallback also covers errors raised through `DbErr::Custom`/`Query`
/// (Postgres SQLSTATE 23505/23503, SQLite "UNIQUE/FOREIGN KEY constraint failed").
pub fn constraint_violation(err: &DbErr) -> Option<ConstraintViolation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(ConstraintViolation::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            return Some(ConstraintViolation::ForeignKey)
        }
        _ => {}
    }

    let msg = err.to_string().to_lowercase();
    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        return Some(ConstraintViolation::Unique);
    }
    if msg.contains("23503") || msg.contains("foreign key") {
        return Some(ConstraintViolation::ForeignKey);
    }

    None
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    constraint_violation(err) == Some(ConstraintViolation::Unique)
}

pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    constraint_violation(err) == Some(ConstraintViolation::ForeignKey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn detects_postgres_duplicate_key_message() {
        let err = DbErr::Custom("duplicate key value violates unique constraint".to_string());
        assert!(is_unique_violation(&err));
        assert!(!is_foreign_key_violation(&err));
    }

    #[test]
    fn detects_sqlite_unique_message() {
        let err = DbErr::Query(RuntimeErr::Internal(
            "UNIQUE constraint failed: users.phone_number".into(),
        ));
        assert!(is_unique_violation(&err));
    }

    #[test]
    fn detects_foreign_key_message() {
        let err = DbErr::Exec(RuntimeErr::Internal(
            "insert or update on table \"courses\" violates foreign key constraint".into(),
        ));
        assert_eq!(
            constraint_violation(&err),
            Some(ConstraintViolation::ForeignKey)
        );
    }

    #[test]
    fn other_errors_are_not_constraint_violations() {
        let err = DbErr::Custom("connection timeout".to_string());
        assert_eq!(constraint_violation(&err), None);
    }
}
