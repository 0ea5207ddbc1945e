//! UI timing constants.
//!
//! These delays only sequence visual transitions; no state depends on them.

use std::time::Duration;

/// How long the "added to your basket" toast stays visible.
pub const TOAST_VISIBLE: Duration = Duration::from_millis(2000);

/// Delay before a successful login/register modal closes itself.
pub const AUTH_MODAL_CLOSE: Duration = Duration::from_millis(1500);

/// Delay between payment confirmation and the redirect home.
pub const PAYMENT_REDIRECT: Duration = Duration::from_millis(3000);

/// How long the contact form success banner stays visible.
pub const SUPPORT_BANNER_VISIBLE: Duration = Duration::from_millis(2500);
