use crate::errors::TokenError;
use soroban_sdk::{panic_with_error, Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use soroban_token_sdk::TokenUtils;

pub fn write_metadata(e: &Env, metadata: TokenMetadata) {
    if metadata.decimal > u8::MAX.into() {
        panic_with_error!(e, TokenError::DecimalTooLarge);
    }
    TokenUtils::new(e).metadata().set_metadata(&metadata);
}

pub fn read_decimal(e: &Env) -> u32 {
    TokenUtils::new(e).metadata().get_metadata().decimal
}

pub fn read_name(e: &Env) -> String {
    TokenUtils::new(e).metadata().get_metadata().name
}

pub fn read_symbol(e: &Env) -> String {
    TokenUtils::new(e).metadata().get_metadata().symbol
}
