use crate::errors::AppError;
use crate::models::account::Role;

use super::Principal;

/// Protected operations. Public reads (job listing, analytics, health) are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateJob,
    ApplyToJob,
    ListMyApplications,
    ListJobApplications,
    UploadResume,
    ViewOwnProfile,
    UpdateOwnProfile,
}

/// Static permission table.
pub fn permitted_roles(op: Operation) -> &'static [Role] {
    match op {
        Operation::CreateJob => &[Role::PlacementOfficer, Role::CompanyHr],
        Operation::ListJobApplications => {
            &[Role::PlacementOfficer, Role::CompanyHr, Role::Principal]
        }
        Operation::ApplyToJob
        | Operation::ListMyApplications
        | Operation::UploadResume
        | Operation::ViewOwnProfile
        | Operation::UpdateOwnProfile => &[Role::Student],
    }
}

pub fn allowed(role: Role, op: Operation) -> bool {
    permitted_roles(op).contains(&role)
}

/// Fails with `Forbidden` unless the principal's role may perform `op`.
pub fn require(principal: &Principal, op: Operation) -> Result<(), AppError> {
    if allowed(principal.role(), op) {
        Ok(())
    } else {
        tracing::warn!(
            "Account {} ({}) denied {:?}",
            principal.id(),
            principal.role(),
            op
        );
        Err(AppError::Forbidden)
    }
}
