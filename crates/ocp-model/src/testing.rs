//! Sample document fixtures shared by tests across the workspace.
//!
//! Enabled for this crate's own tests and, behind the `testing` feature,
//! for dependent crates' test suites. Not part of the production API.

use ocp_core::{CountryCode, Timestamp};

use crate::document::{DocumentType, TenderDocument};
use crate::item::Item;
use crate::lot::Lot;
use crate::tender::{
    LegalBasis, MainProcurementCategory, OrganizationReference, ProcedureFlags, ProcurementMethod,
    Tender,
};
use crate::value::{
    Address, Classification, Money, Period, PlaceOfPerformance, Scheme, Unit,
};

/// A EUR amount.
pub fn money(amount: f64) -> Money {
    Money { amount, currency: "EUR".to_string() }
}

/// A CPV classification.
pub fn classification(code: &str) -> Classification {
    Classification {
        scheme: Scheme::Cpv,
        id: code.to_string(),
        description: format!("CPV {code}"),
    }
}

/// A one-year contract period.
pub fn period() -> Period {
    Period {
        start_date: Timestamp::parse("2026-01-01T00:00:00Z").expect("fixture timestamp"),
        end_date: Timestamp::parse("2026-12-31T00:00:00Z").expect("fixture timestamp"),
    }
}

/// A place of performance in Chisinau.
pub fn place_of_performance() -> PlaceOfPerformance {
    PlaceOfPerformance {
        address: Address {
            street_address: "1 Stefan cel Mare".to_string(),
            locality: "Chisinau".to_string(),
            region: "Chisinau".to_string(),
            postal_code: Some("MD-2001".to_string()),
            country: CountryCode::new("MD").expect("fixture country"),
        },
        description: None,
    }
}

/// A lot with the given id and unset status fields.
pub fn sample_lot(id: &str) -> Lot {
    Lot {
        id: id.to_string(),
        title: format!("Lot {id}"),
        description: "Road maintenance works".to_string(),
        status: None,
        status_details: None,
        value: money(50_000.0),
        contract_period: period(),
        place_of_performance: place_of_performance(),
        has_options: false,
        has_variants: false,
        has_renewals: false,
        is_recurrent: false,
    }
}

/// An item tied to the given lot.
pub fn sample_item(id: &str, related_lot: &str) -> Item {
    Item {
        id: id.to_string(),
        related_lot: related_lot.to_string(),
        description: "Asphalt".to_string(),
        classification: classification("44113620-7"),
        additional_classifications: Vec::new(),
        quantity: 10.0,
        unit: Unit { id: "TNE".to_string(), name: "tonne".to_string() },
    }
}

/// A bidding document scoped to the given lots (empty = whole tender).
pub fn sample_document(id: &str, related_lots: &[&str]) -> TenderDocument {
    TenderDocument {
        id: id.to_string(),
        document_type: DocumentType::BiddingDocuments,
        title: format!("Document {id}"),
        description: None,
        related_lots: related_lots.iter().map(|s| s.to_string()).collect(),
    }
}

/// A tender with unset system-owned fields and the given parts.
pub fn sample_tender(lots: Vec<Lot>, items: Vec<Item>, documents: Vec<TenderDocument>) -> Tender {
    Tender {
        id: None,
        title: "Road maintenance 2026".to_string(),
        description: "Maintenance of regional roads".to_string(),
        status: None,
        status_details: None,
        classification: classification("45233139-3"),
        procuring_entity: OrganizationReference {
            id: "MD-IDNO-1003600000000".to_string(),
            name: "State Road Administration".to_string(),
        },
        value: money(250_000.0),
        legal_basis: LegalBasis::NationalProcurementLaw,
        procurement_method: ProcurementMethod::Open,
        procurement_method_details: "Open tender".to_string(),
        main_procurement_category: MainProcurementCategory::Works,
        award_criteria: None,
        submission_languages: vec!["ro".to_string()],
        lots,
        items,
        documents,
        lot_groups: Vec::new(),
        flags: ProcedureFlags::default(),
    }
}
