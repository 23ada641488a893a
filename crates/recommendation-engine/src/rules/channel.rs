//! Channel hints
//!
//! `Both` triggers neither rule: the native OTP hint is App-exclusive and
//! the mWeb intent hint fires only for single-channel merchants.

use shared_types::{Channel, Tier};

use crate::assembler::Assembly;

pub const NATIVE_OTP_ADDON: &str = "Juspay Native OTP";
pub const MWEB_INTENT_ADDON: &str = "UPI Intent on mWeb";

pub fn apply_channel_rules(channel: Channel, assembly: &mut Assembly) {
    if channel == Channel::App {
        assembly.push(Tier::GoodToHave, NATIVE_OTP_ADDON);
    }
    if channel == Channel::Web || channel == Channel::App {
        assembly.push(Tier::GoodToHave, MWEB_INTENT_ADDON);
    }
}
