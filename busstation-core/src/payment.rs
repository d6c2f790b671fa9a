use busstation_shared::Masked;
use serde::{Deserialize, Serialize};

/// Body of `POST /reservation/simulate-payment`.
///
/// The backend only simulates mobile-money settlement; `simulate_success` asks it to
/// report the payment as settled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub id_reservation: String,
    pub user_id: String,
    pub amount: f64,
    pub mobile_phone: Masked<String>,
    pub mobile_phone_name: String,
    #[serde(rename = "simulate_success")]
    pub simulate_success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_wire_format() {
        let request = PaymentRequest {
            id_reservation: "R1".to_string(),
            user_id: "U1".to_string(),
            amount: 12000.0,
            mobile_phone: Masked::from("677000000"),
            mobile_phone_name: "Awa Ngono".to_string(),
            simulate_success: true,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["idReservation"], "R1");
        assert_eq!(json["mobilePhone"], "677000000");
        assert_eq!(json["simulate_success"], true);
        assert!(!format!("{:?}", request).contains("677000000"));
    }
}
