//! Authorization policy.
//!
//! A single table-driven predicate over (role, action), evaluated once per
//! request after authentication succeeds. Handlers never reimplement role
//! checks ad hoc.

use crate::auth::users::Role;
use crate::error::ApiError;

/// Operations gated by the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List/get artists, albums, tracks.
    ReadCatalog,
    /// Create/update/delete artists, albums, tracks.
    WriteCatalog,
    /// List own favorites.
    ReadFavorites,
    /// Add/remove own favorites.
    WriteFavorites,
    /// List/add/delete users.
    ManageUsers,
    /// Change own password (old password re-proved in the handler).
    UpdateOwnPassword,
}

/// The policy table: operation × role → allow.
pub fn is_allowed(role: Role, action: Action) -> bool {
    match action {
        Action::ReadCatalog
        | Action::ReadFavorites
        | Action::WriteFavorites
        | Action::UpdateOwnPassword => true,
        Action::WriteCatalog => matches!(role, Role::Admin | Role::Editor),
        Action::ManageUsers => matches!(role, Role::Admin),
    }
}

/// Fail with `Forbidden` when the role may not perform the action.
pub fn require(role: Role, action: Action) -> Result<(), ApiError> {
    if is_allowed(role, action) {
        Ok(())
    } else {
        Err(ApiError::forbidden("Forbidden Access/Operation not allowed."))
    }
}

/// Admin accounts can never be deleted, not even by another Admin.
pub fn can_delete_user(target_role: Role) -> bool {
    target_role != Role::Admin
}
