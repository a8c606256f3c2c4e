//! Fixed action vocabulary for audit events
//!
//! Dot-separated `<domain>.<verb>` identifiers covering every auditable
//! operation in the marketplace. The taxonomy is closed by convention —
//! extend it by adding constants here, not by inventing strings at call
//! sites. The ledger itself accepts unknown action strings; use
//! [`is_known`] where stricter handling is wanted.

// Authentication
pub const LOGIN: &str = "user.login";
pub const LOGOUT: &str = "user.logout";
pub const LOGIN_FAILED: &str = "user.login_failed";
pub const PASSWORD_CHANGE: &str = "user.password_change";
pub const PASSWORD_RESET: &str = "user.password_reset";
pub const TWO_FACTOR_ENABLE: &str = "user.2fa_enable";
pub const TWO_FACTOR_DISABLE: &str = "user.2fa_disable";

// Deal lifecycle
pub const DEAL_CREATE: &str = "deal.create";
pub const DEAL_UPDATE: &str = "deal.update";
pub const DEAL_DELETE: &str = "deal.delete";
pub const DEAL_APPROVE: &str = "deal.approve";
pub const DEAL_REJECT: &str = "deal.reject";
pub const DEAL_FUND: &str = "deal.fund";

// Investment lifecycle
pub const INVESTMENT_CREATE: &str = "investment.create";
pub const INVESTMENT_UPDATE: &str = "investment.update";
pub const INVESTMENT_CANCEL: &str = "investment.cancel";
pub const INVESTMENT_APPROVE: &str = "investment.approve";
pub const INVESTMENT_REJECT: &str = "investment.reject";

// Documents
pub const DOCUMENT_UPLOAD: &str = "document.upload";
pub const DOCUMENT_DOWNLOAD: &str = "document.download";
pub const DOCUMENT_DELETE: &str = "document.delete";
pub const DOCUMENT_VIEW: &str = "document.view";

// Payments
pub const PAYMENT_INITIATE: &str = "payment.initiate";
pub const PAYMENT_COMPLETE: &str = "payment.complete";
pub const PAYMENT_FAIL: &str = "payment.fail";
pub const PAYMENT_REFUND: &str = "payment.refund";

// Administration
pub const USER_CREATE: &str = "admin.user_create";
pub const USER_UPDATE: &str = "admin.user_update";
pub const USER_DELETE: &str = "admin.user_delete";
pub const USER_SUSPEND: &str = "admin.user_suspend";
pub const USER_ACTIVATE: &str = "admin.user_activate";
pub const SYSTEM_CONFIG_UPDATE: &str = "admin.system_config_update";

// Security
pub const SUSPICIOUS_ACTIVITY: &str = "security.suspicious_activity";
pub const UNAUTHORIZED_ACCESS: &str = "security.unauthorized_access";
pub const DATA_EXPORT: &str = "security.data_export";
pub const DATA_IMPORT: &str = "security.data_import";

/// Every action in the taxonomy
pub const ALL: &[&str] = &[
    LOGIN,
    LOGOUT,
    LOGIN_FAILED,
    PASSWORD_CHANGE,
    PASSWORD_RESET,
    TWO_FACTOR_ENABLE,
    TWO_FACTOR_DISABLE,
    DEAL_CREATE,
    DEAL_UPDATE,
    DEAL_DELETE,
    DEAL_APPROVE,
    DEAL_REJECT,
    DEAL_FUND,
    INVESTMENT_CREATE,
    INVESTMENT_UPDATE,
    INVESTMENT_CANCEL,
    INVESTMENT_APPROVE,
    INVESTMENT_REJECT,
    DOCUMENT_UPLOAD,
    DOCUMENT_DOWNLOAD,
    DOCUMENT_DELETE,
    DOCUMENT_VIEW,
    PAYMENT_INITIATE,
    PAYMENT_COMPLETE,
    PAYMENT_FAIL,
    PAYMENT_REFUND,
    USER_CREATE,
    USER_UPDATE,
    USER_DELETE,
    USER_SUSPEND,
    USER_ACTIVATE,
    SYSTEM_CONFIG_UPDATE,
    SUSPICIOUS_ACTIVITY,
    UNAUTHORIZED_ACCESS,
    DATA_EXPORT,
    DATA_IMPORT,
];

/// Check whether an action string belongs to the taxonomy
pub fn is_known(action: &str) -> bool {
    ALL.contains(&action)
}
