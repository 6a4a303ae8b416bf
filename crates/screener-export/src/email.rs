use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Addressee of the referral e-mail, taken from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

/// A composed message. Delivery is left to the caller's mail client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

pub fn compose_referral_email(recipient: &Recipient, date: Date, summary_text: &str) -> ReferralEmail {
    let salutation = if recipient.name.trim().is_empty() {
        "Dear Clinician,".to_string()
    } else {
        format!("Dear {},", recipient.name)
    };

    let body = format!(
        "{salutation}\n\nPlease find the patient screening report below.\n\n{summary_text}\n\n\
         (Note: This report was generated by the Patient Self-Screening Tool)"
    );

    ReferralEmail {
        to: recipient.email.clone(),
        subject: format!("Confidential Screening Report - {date}"),
        body,
    }
}
