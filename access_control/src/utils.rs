use crate::access::{AccessControl, AccessControlTrait};
use crate::role::Role;
use soroban_sdk::{Address, Env};

// capability check shared by every owner-only entry point
pub fn require_admin(e: &Env, address: &Address) {
    address.require_auth();
    AccessControl::new(e).assert_address_has_role(address, &Role::Admin);
}
