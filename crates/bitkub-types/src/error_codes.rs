//! Bitkub API error code mapping
//!
//! Every Bitkub response body may carry a numeric `error` field. Code `0`
//! means success; the rest identify a business failure. This module maps the
//! documented codes to human-readable messages.

/// All known Bitkub API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitkubErrorCode {
    /// 0: No error
    NoError,
    /// 1: Invalid JSON payload
    InvalidJsonPayload,
    /// 2: Missing X-BTK-APIKEY
    MissingApiKey,
    /// 3: Invalid API key
    InvalidApiKey,
    /// 4: API pending for activation
    ApiPendingActivation,
    /// 5: IP not allowed
    IpNotAllowed,
    /// 6: Missing / invalid signature
    InvalidSignature,
    /// 7: Missing timestamp
    MissingTimestamp,
    /// 8: Invalid timestamp
    InvalidTimestamp,
    /// 9: Invalid user
    InvalidUser,
    /// 10: Invalid parameter
    InvalidParameter,
    /// 11: Invalid symbol
    InvalidSymbol,
    /// 12: Invalid amount
    InvalidAmount,
    /// 13: Invalid rate
    InvalidRate,
    /// 14: Improper rate
    ImproperRate,
    /// 15: Amount too low
    AmountTooLow,
    /// 16: Failed to get balance
    BalanceUnavailable,
    /// 17: Wallet is empty
    WalletEmpty,
    /// 18: Insufficient balance
    InsufficientBalance,
    /// 19: Failed to insert order into db
    OrderInsertFailed,
    /// 20: Failed to deduct balance
    DeductBalanceFailed,
    /// 21: Invalid order for cancellation
    InvalidCancelOrder,
    /// 22: Invalid side
    InvalidSide,
    /// 23: Failed to update order status
    OrderStatusUpdateFailed,
    /// 24: Invalid order for lookup
    InvalidLookupOrder,
    /// 25: KYC level 1 is required to proceed
    KycRequired,
    /// 30: Limit exceeds
    LimitExceeded,
    /// 40: Pending withdrawal exists
    PendingWithdrawal,
    /// 41: Invalid currency for withdrawal
    InvalidWithdrawCurrency,
    /// 42: Address is not in whitelist
    AddressNotWhitelisted,
    /// 43: Failed to deduct crypto
    DeductCryptoFailed,
    /// 44: Failed to create withdrawal record
    WithdrawalRecordFailed,
    /// 45: Nonce has to be numeric
    NonNumericNonce,
    /// 46: Invalid nonce
    InvalidNonce,
    /// 47: Withdrawal limit exceeds
    WithdrawalLimitExceeded,
    /// 48: Invalid bank account
    InvalidBankAccount,
    /// 49: Bank limit exceeds
    BankLimitExceeded,
    /// 50: Pending withdrawal exists
    PendingFiatWithdrawal,
    /// 51: Withdrawal is under maintenance
    WithdrawalMaintenance,
    /// 52: Invalid permission
    InvalidPermission,
    /// 53: Invalid internal address
    InvalidInternalAddress,
    /// 54: Address has been deprecated
    DeprecatedAddress,
    /// 55: Cancel only mode
    CancelOnlyMode,
    /// 56: User has been suspended from purchasing
    PurchaseSuspended,
    /// 57: User has been suspended from selling
    SellSuspended,
    /// 90: Server error (please contact support)
    ServerError,
}

impl BitkubErrorCode {
    /// Look up a numeric code
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::NoError,
            1 => Self::InvalidJsonPayload,
            2 => Self::MissingApiKey,
            3 => Self::InvalidApiKey,
            4 => Self::ApiPendingActivation,
            5 => Self::IpNotAllowed,
            6 => Self::InvalidSignature,
            7 => Self::MissingTimestamp,
            8 => Self::InvalidTimestamp,
            9 => Self::InvalidUser,
            10 => Self::InvalidParameter,
            11 => Self::InvalidSymbol,
            12 => Self::InvalidAmount,
            13 => Self::InvalidRate,
            14 => Self::ImproperRate,
            15 => Self::AmountTooLow,
            16 => Self::BalanceUnavailable,
            17 => Self::WalletEmpty,
            18 => Self::InsufficientBalance,
            19 => Self::OrderInsertFailed,
            20 => Self::DeductBalanceFailed,
            21 => Self::InvalidCancelOrder,
            22 => Self::InvalidSide,
            23 => Self::OrderStatusUpdateFailed,
            24 => Self::InvalidLookupOrder,
            25 => Self::KycRequired,
            30 => Self::LimitExceeded,
            40 => Self::PendingWithdrawal,
            41 => Self::InvalidWithdrawCurrency,
            42 => Self::AddressNotWhitelisted,
            43 => Self::DeductCryptoFailed,
            44 => Self::WithdrawalRecordFailed,
            45 => Self::NonNumericNonce,
            46 => Self::InvalidNonce,
            47 => Self::WithdrawalLimitExceeded,
            48 => Self::InvalidBankAccount,
            49 => Self::BankLimitExceeded,
            50 => Self::PendingFiatWithdrawal,
            51 => Self::WithdrawalMaintenance,
            52 => Self::InvalidPermission,
            53 => Self::InvalidInternalAddress,
            54 => Self::DeprecatedAddress,
            55 => Self::CancelOnlyMode,
            56 => Self::PurchaseSuspended,
            57 => Self::SellSuspended,
            90 => Self::ServerError,
            _ => return None,
        })
    }

    /// Numeric code as sent by the exchange
    pub fn code(&self) -> i64 {
        match self {
            Self::NoError => 0,
            Self::InvalidJsonPayload => 1,
            Self::MissingApiKey => 2,
            Self::InvalidApiKey => 3,
            Self::ApiPendingActivation => 4,
            Self::IpNotAllowed => 5,
            Self::InvalidSignature => 6,
            Self::MissingTimestamp => 7,
            Self::InvalidTimestamp => 8,
            Self::InvalidUser => 9,
            Self::InvalidParameter => 10,
            Self::InvalidSymbol => 11,
            Self::InvalidAmount => 12,
            Self::InvalidRate => 13,
            Self::ImproperRate => 14,
            Self::AmountTooLow => 15,
            Self::BalanceUnavailable => 16,
            Self::WalletEmpty => 17,
            Self::InsufficientBalance => 18,
            Self::OrderInsertFailed => 19,
            Self::DeductBalanceFailed => 20,
            Self::InvalidCancelOrder => 21,
            Self::InvalidSide => 22,
            Self::OrderStatusUpdateFailed => 23,
            Self::InvalidLookupOrder => 24,
            Self::KycRequired => 25,
            Self::LimitExceeded => 30,
            Self::PendingWithdrawal => 40,
            Self::InvalidWithdrawCurrency => 41,
            Self::AddressNotWhitelisted => 42,
            Self::DeductCryptoFailed => 43,
            Self::WithdrawalRecordFailed => 44,
            Self::NonNumericNonce => 45,
            Self::InvalidNonce => 46,
            Self::WithdrawalLimitExceeded => 47,
            Self::InvalidBankAccount => 48,
            Self::BankLimitExceeded => 49,
            Self::PendingFiatWithdrawal => 50,
            Self::WithdrawalMaintenance => 51,
            Self::InvalidPermission => 52,
            Self::InvalidInternalAddress => 53,
            Self::DeprecatedAddress => 54,
            Self::CancelOnlyMode => 55,
            Self::PurchaseSuspended => 56,
            Self::SellSuspended => 57,
            Self::ServerError => 90,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoError => "No error",
            Self::InvalidJsonPayload => "Invalid JSON payload",
            Self::MissingApiKey => "Missing X-BTK-APIKEY",
            Self::InvalidApiKey => "Invalid API key",
            Self::ApiPendingActivation => "API pending for activation",
            Self::IpNotAllowed => "IP not allowed",
            Self::InvalidSignature => "Missing / invalid signature",
            Self::MissingTimestamp => "Missing timestamp",
            Self::InvalidTimestamp => "Invalid timestamp",
            Self::InvalidUser => "Invalid user",
            Self::InvalidParameter => "Invalid parameter",
            Self::InvalidSymbol => "Invalid symbol",
            Self::InvalidAmount => "Invalid amount",
            Self::InvalidRate => "Invalid rate",
            Self::ImproperRate => "Improper rate",
            Self::AmountTooLow => "Amount too low",
            Self::BalanceUnavailable => "Failed to get balance",
            Self::WalletEmpty => "Wallet is empty",
            Self::InsufficientBalance => "Insufficient balance",
            Self::OrderInsertFailed => "Failed to insert order into db",
            Self::DeductBalanceFailed => "Failed to deduct balance",
            Self::InvalidCancelOrder => "Invalid order for cancellation",
            Self::InvalidSide => "Invalid side",
            Self::OrderStatusUpdateFailed => "Failed to update order status",
            Self::InvalidLookupOrder => "Invalid order for lookup",
            Self::KycRequired => "KYC level 1 is required to proceed",
            Self::LimitExceeded => "Limit exceeds",
            Self::PendingWithdrawal => "Pending withdrawal exists",
            Self::InvalidWithdrawCurrency => "Invalid currency for withdrawal",
            Self::AddressNotWhitelisted => "Address is not in whitelist",
            Self::DeductCryptoFailed => "Failed to deduct crypto",
            Self::WithdrawalRecordFailed => "Failed to create withdrawal record",
            Self::NonNumericNonce => "Nonce has to be numeric",
            Self::InvalidNonce => "Invalid nonce",
            Self::WithdrawalLimitExceeded => "Withdrawal limit exceeds",
            Self::InvalidBankAccount => "Invalid bank account",
            Self::BankLimitExceeded => "Bank limit exceeds",
            Self::PendingFiatWithdrawal => "Pending withdrawal exists",
            Self::WithdrawalMaintenance => "Withdrawal is under maintenance",
            Self::InvalidPermission => "Invalid permission",
            Self::InvalidInternalAddress => "Invalid internal address",
            Self::DeprecatedAddress => "Address has been deprecated",
            Self::CancelOnlyMode => "Cancel only mode",
            Self::PurchaseSuspended => "User has been suspended from purchasing",
            Self::SellSuspended => "User has been suspended from selling",
            Self::ServerError => "Server error (please contact support)",
        }
    }

    /// Check if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey
                | Self::InvalidApiKey
                | Self::ApiPendingActivation
                | Self::IpNotAllowed
                | Self::InvalidSignature
                | Self::MissingTimestamp
                | Self::InvalidTimestamp
                | Self::InvalidPermission
        )
    }

    /// Check if this is a trading-related error
    pub fn is_trading_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSymbol
                | Self::InvalidAmount
                | Self::InvalidRate
                | Self::ImproperRate
                | Self::AmountTooLow
                | Self::InsufficientBalance
                | Self::InvalidCancelOrder
                | Self::InvalidSide
                | Self::InvalidLookupOrder
                | Self::CancelOnlyMode
                | Self::PurchaseSuspended
                | Self::SellSuspended
        )
    }

    /// Check if this is a deposit/withdrawal error
    pub fn is_withdrawal_error(&self) -> bool {
        (40..=54).contains(&self.code())
    }
}

impl std::fmt::Display for BitkubErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// Message for a numeric error code, if the code is known
pub fn error_message(code: i64) -> Option<&'static str> {
    BitkubErrorCode::from_code(code).map(|c| c.message())
}
