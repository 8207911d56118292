// 3 days
pub const ADMIN_ACTIONS_DELAY: u64 = 3 * 86400;
