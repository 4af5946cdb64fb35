//! Pure join/cancel admission logic.
//!
//! No I/O here: the guard answers from the counsel snapshot and the
//! local join flag. The server re-checks everything; this exists so the
//! client refuses obviously doomed requests before the network.

use std::fmt;

use counsel_core::error::AppError;
use counsel_entity::counsel::{Counsel, CounselStatus};

/// Why a join request is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinBlock {
    /// The session's status no longer accepts registrations.
    NotJoinable(CounselStatus),
    /// The session is at capacity.
    Full,
    /// The student already holds a registration.
    AlreadyJoined,
}

impl fmt::Display for JoinBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotJoinable(status) => {
                write!(f, "Session is {status} and no longer accepts registrations")
            }
            Self::Full => write!(f, "Session is full"),
            Self::AlreadyJoined => write!(f, "Already registered for this session"),
        }
    }
}

impl From<JoinBlock> for AppError {
    fn from(block: JoinBlock) -> Self {
        match block {
            JoinBlock::NotJoinable(_) => AppError::validation(block.to_string()),
            JoinBlock::Full | JoinBlock::AlreadyJoined => AppError::conflict(block.to_string()),
        }
    }
}

/// Why a cancel request is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelBlock {
    /// The student holds no registration to cancel.
    NotJoined,
}

impl fmt::Display for CancelBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotJoined => write!(f, "Not registered for this session"),
        }
    }
}

impl From<CancelBlock> for AppError {
    fn from(block: CancelBlock) -> Self {
        AppError::conflict(block.to_string())
    }
}

/// Checks whether a student may register into the given counsel.
///
/// Allowed iff the status is joinable, a seat remains, and the student
/// is not already registered.
pub fn check_join(counsel: &Counsel, already_joined: bool) -> Result<(), JoinBlock> {
    if !counsel.is_joinable() {
        return Err(JoinBlock::NotJoinable(counsel.status));
    }
    if counsel.is_full() {
        return Err(JoinBlock::Full);
    }
    if already_joined {
        return Err(JoinBlock::AlreadyJoined);
    }
    Ok(())
}

/// Checks whether a student may cancel their registration.
pub fn check_cancel(already_joined: bool) -> Result<(), CancelBlock> {
    if already_joined {
        Ok(())
    } else {
        Err(CancelBlock::NotJoined)
    }
}

/// Boolean convenience over [`check_join`].
pub fn can_join(counsel: &Counsel, already_joined: bool) -> bool {
    check_join(counsel, already_joined).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use counsel_core::types::CounselId;

    fn counsel(status: CounselStatus, current: u32, max: u32) -> Counsel {
        Counsel {
            id: CounselId::new(1),
            title: "Office hours".into(),
            description: String::new(),
            start_time: "2026-03-02T10:00:00".parse().expect("datetime"),
            end_time: None,
            max_participants: max,
            current_participants: current,
            status,
            faculty_id: None,
            faculty_name: None,
        }
    }

    #[test]
    fn test_join_rejected_at_capacity() {
        let c = counsel(CounselStatus::Pending, 5, 5);
        assert_eq!(check_join(&c, false), Err(JoinBlock::Full));
        assert!(!can_join(&c, false));
    }

    #[test]
    fn test_join_rejected_when_already_joined() {
        let c = counsel(CounselStatus::Pending, 2, 5);
        assert_eq!(check_join(&c, true), Err(JoinBlock::AlreadyJoined));
    }

    #[test]
    fn test_join_rejected_for_terminal_statuses() {
        for status in [CounselStatus::Completed, CounselStatus::Cancelled] {
            let c = counsel(status, 0, 5);
            assert_eq!(check_join(&c, false), Err(JoinBlock::NotJoinable(status)));
        }
    }

    #[test]
    fn test_join_allowed_for_pending_and_active() {
        for status in [CounselStatus::Pending, CounselStatus::Active] {
            let c = counsel(status, 4, 5);
            assert_eq!(check_join(&c, false), Ok(()));
        }
    }

    #[test]
    fn test_cancel_requires_registration() {
        assert_eq!(check_cancel(true), Ok(()));
        assert_eq!(check_cancel(false), Err(CancelBlock::NotJoined));
    }

    #[test]
    fn test_block_error_kinds() {
        let full: AppError = JoinBlock::Full.into();
        assert_eq!(full.kind, counsel_core::error::ErrorKind::Conflict);
        let stale: AppError = JoinBlock::NotJoinable(CounselStatus::Completed).into();
        assert_eq!(stale.kind, counsel_core::error::ErrorKind::Validation);
    }
}
