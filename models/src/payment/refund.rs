//! Server-populated records attached to a payment. These are decode-only in
//! practice; the client never sends them.

use crate::api_object::ApiObject;
use crate::date_format;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum RefundStatus {
        Pending => "PENDING",
        Cancelled => "CANCELLED",
        Done => "DONE",
    }
}

wire_enum! {
    pub enum ChargebackStatus {
        Requested => "REQUESTED",
        InDispute => "IN_DISPUTE",
        DisputeLost => "DISPUTE_LOST",
        Reversed => "REVERSED",
        Done => "DONE",
    }
}

wire_enum! {
    /// Reason codes reported by the card networks.
    pub enum ChargebackReason {
        AbsenceOfPrint => "ABSENCE_OF_PRINT",
        AbsentCardFraud => "ABSENT_CARD_FRAUD",
        CardActivatedPhoneTransaction => "CARD_ACTIVATED_PHONE_TRANSACTION",
        CardFraud => "CARD_FRAUD",
        CardRecoveryBulletin => "CARD_RECOVERY_BULLETIN",
        CommercialDisagreement => "COMMERCIAL_DISAGREEMENT",
        CopyNotReceived => "COPY_NOT_RECEIVED",
        CreditOrDebitPresentationError => "CREDIT_OR_DEBIT_PRESENTATION_ERROR",
        DifferentPayMethod => "DIFFERENT_PAY_METHOD",
        Fraud => "FRAUD",
        IncorrectTransactionValue => "INCORRECT_TRANSACTION_VALUE",
        InvalidCurrency => "INVALID_CURRENCY",
        InvalidData => "INVALID_DATA",
        LatePresentation => "LATE_PRESENTATION",
        LocalRegulatoryOrLegalDispute => "LOCAL_REGULATORY_OR_LEGAL_DISPUTE",
        MultipleRocs => "MULTIPLE_ROCS",
        OriginalCreditTransactionNotAccepted => "ORIGINAL_CREDIT_TRANSACTION_NOT_ACCEPTED",
        OtherAbsentCardFraud => "OTHER_ABSENT_CARD_FRAUD",
        ProcessError => "PROCESS_ERROR",
        ReceivedCopyIllegibleOrIncomplete => "RECEIVED_COPY_ILLEGIBLE_OR_INCOMPLETE",
        RecurrenceCanceled => "RECURRENCE_CANCELED",
        RequiredAuthorizationNotGranted => "REQUIRED_AUTHORIZATION_NOT_GRANTED",
        RightOfFullRecourseForFraud => "RIGHT_OF_FULL_RECOURSE_FOR_FRAUD",
        SaleCanceled => "SALE_CANCELED",
        ServiceDisagreementOrDefectiveProduct => "SERVICE_DISAGREEMENT_OR_DEFECTIVE_PRODUCT",
        ServiceNotReceived => "SERVICE_NOT_RECEIVED",
        SplitSale => "SPLIT_SALE",
        TransfersOfDiverseResponsibilities => "TRANSFERS_OF_DIVERSE_RESPONSIBILITIES",
        UnqualifiedCarRentalDebit => "UNQUALIFIED_CAR_RENTAL_DEBIT",
        UsaCardholderDispute => "USA_CARDHOLDER_DISPUTE",
        VisaFraudMonitoringProgram => "VISA_FRAUD_MONITORING_PROGRAM",
        WarningBulletinFile => "WARNING_BULLETIN_FILE",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    #[serde(with = "date_format")]
    pub date_created: NaiveDate,
    pub status: RefundStatus,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_receipt_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chargeback {
    pub status: ChargebackStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ChargebackReason>,
}

impl ApiObject for Refund {}
impl ApiObject for Chargeback {}
