// src/checklist/guide.rs
use crate::models::DocumentCategory;

/// Documents to gather before visiting a center.
pub fn default_items(category: DocumentCategory) -> Vec<String> {
    let items: &[&str] = match category {
        DocumentCategory::Aadhar => &[
            "Proof of Identity (POI)",
            "Proof of Address (POA)",
            "Date of Birth proof",
            "Mobile number",
            "Email ID",
        ],
        DocumentCategory::Pan => &[
            "Identity proof",
            "Address proof",
            "Date of birth proof",
            "Passport size photograph",
            "Payment receipt",
        ],
        DocumentCategory::Voter => &[
            "Proof of age",
            "Proof of residence",
            "Passport size photograph",
            "Aadhar card",
            "Mobile number",
        ],
        DocumentCategory::Passport => &[
            "Proof of date of birth",
            "Proof of address",
            "Proof of identity",
            "Passport size photographs",
            "Payment receipt",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// How to apply, in order.
pub fn process_steps(category: DocumentCategory) -> Vec<String> {
    let steps: &[&str] = match category {
        DocumentCategory::Aadhar => &[
            "Visit the nearest Aadhar Enrollment Center",
            "Fill out the enrollment form",
            "Provide biometric data (fingerprints and iris scan)",
            "Submit required documents",
            "Receive acknowledgment slip with enrollment ID",
            "Track status online using enrollment ID",
            "Receive Aadhar card by post",
        ],
        DocumentCategory::Pan => &[
            "Fill out Form 49A online",
            "Upload required documents",
            "Pay application fee",
            "Schedule appointment for verification",
            "Visit PAN center for verification",
            "Track application status",
            "Receive PAN card by post",
        ],
        DocumentCategory::Voter => &[
            "Fill out Form 6 online",
            "Upload required documents",
            "Visit electoral office for verification",
            "Provide biometric data",
            "Receive acknowledgment slip",
            "Track application status",
            "Collect Voter ID card",
        ],
        DocumentCategory::Passport => &[
            "Fill out online application form",
            "Upload required documents",
            "Pay application fee",
            "Schedule appointment at PSK",
            "Visit PSK for verification",
            "Track application status",
            "Receive passport by post",
        ],
    };
    steps.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aadhar_items() {
        assert_eq!(
            default_items(DocumentCategory::Aadhar),
            vec![
                "Proof of Identity (POI)",
                "Proof of Address (POA)",
                "Date of Birth proof",
                "Mobile number",
                "Email ID",
            ]
        );
    }

    #[test]
    fn test_every_category_has_five_items() {
        for category in DocumentCategory::ALL {
            assert_eq!(default_items(category).len(), 5);
        }
        assert!(default_items(DocumentCategory::Voter).contains(&"Aadhar card".to_string()));
        assert_eq!(
            default_items(DocumentCategory::Passport).last().map(String::as_str),
            Some("Payment receipt")
        );
    }

    #[test]
    fn test_process_steps() {
        for category in DocumentCategory::ALL {
            assert_eq!(process_steps(category).len(), 7);
        }
        let aadhar = process_steps(DocumentCategory::Aadhar);
        assert_eq!(aadhar[0], "Visit the nearest Aadhar Enrollment Center");
        assert_eq!(aadhar[6], "Receive Aadhar card by post");
        assert_eq!(process_steps(DocumentCategory::Pan)[0], "Fill out Form 49A online");
    }
}
