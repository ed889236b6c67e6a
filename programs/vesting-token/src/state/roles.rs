use anchor_lang::prelude::*;

use crate::constants::MAX_ROLE_MEMBERS;
use crate::error::VestingError;

/// A single (role, member) capability entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleEntry {
    pub role: u8,
    pub member: Pubkey,
}

impl RoleEntry {
    pub const SIZE: usize =
        1 +  // role
        32;  // member
}

/// Role registry PDA: role id -> set of authorized principals.
/// The admin key lives in `Config` and is checked separately.
#[account]
pub struct Roles {
    pub entries: Vec<RoleEntry>,
}

impl Roles {
    /// Space for discriminator + vec header + bounded entry list.
    pub const fn space() -> usize {
        8 + 4 + MAX_ROLE_MEMBERS * RoleEntry::SIZE
    }

    pub fn holds(&self, role: u8, member: &Pubkey) -> bool {
        self.entries
            .iter()
            .any(|e| e.role == role && e.member == *member)
    }

    pub fn grant(&mut self, role: u8, member: Pubkey) -> core::result::Result<(), VestingError> {
        if self.holds(role, &member) {
            return Err(VestingError::RoleAlreadyGranted);
        }
        if self.entries.len() >= MAX_ROLE_MEMBERS {
            return Err(VestingError::RoleListFull);
        }
        self.entries.push(RoleEntry { role, member });
        Ok(())
    }

    pub fn revoke(&mut self, role: u8, member: &Pubkey) -> core::result::Result<(), VestingError> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.role == role && e.member == *member)
            .ok_or(VestingError::RoleNotGranted)?;
        self.entries.remove(idx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ROLE_BURNER, ROLE_GRANTER};

    #[test]
    fn grant_and_check_role() {
        let mut roles = Roles { entries: vec![] };
        let member = Pubkey::new_unique();
        roles.grant(ROLE_BURNER, member).unwrap();
        assert!(roles.holds(ROLE_BURNER, &member));
        // Same member does not hold a different role.
        assert!(!roles.holds(ROLE_GRANTER, &member));
    }

    #[test]
    fn duplicate_grant_rejected() {
        let mut roles = Roles { entries: vec![] };
        let member = Pubkey::new_unique();
        roles.grant(ROLE_GRANTER, member).unwrap();
        let err = roles.grant(ROLE_GRANTER, member).unwrap_err();
        assert!(matches!(err, VestingError::RoleAlreadyGranted));
    }

    #[test]
    fn revoke_removes_only_matching_entry() {
        let mut roles = Roles { entries: vec![] };
        let member = Pubkey::new_unique();
        roles.grant(ROLE_GRANTER, member).unwrap();
        roles.grant(ROLE_BURNER, member).unwrap();
        roles.revoke(ROLE_GRANTER, &member).unwrap();
        assert!(!roles.holds(ROLE_GRANTER, &member));
        assert!(roles.holds(ROLE_BURNER, &member));
    }

    #[test]
    fn revoke_absent_entry_rejected() {
        let mut roles = Roles { entries: vec![] };
        let err = roles.revoke(ROLE_BURNER, &Pubkey::new_unique()).unwrap_err();
        assert!(matches!(err, VestingError::RoleNotGranted));
    }

    #[test]
    fn list_is_bounded() {
        let mut roles = Roles { entries: vec![] };
        for _ in 0..MAX_ROLE_MEMBERS {
            roles.grant(ROLE_GRANTER, Pubkey::new_unique()).unwrap();
        }
        let err = roles
            .grant(ROLE_GRANTER, Pubkey::new_unique())
            .unwrap_err();
        assert!(matches!(err, VestingError::RoleListFull));
    }
}
