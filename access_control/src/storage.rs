use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Admin,
    FutureAdmin,
    TransferOwnershipDeadline,
}
