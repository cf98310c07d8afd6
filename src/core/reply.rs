//! Outbound reply texts.

use crate::directory::OfficeRecord;

pub const CLARIFICATION: &str = "I couldn't understand your query completely. Please specify both the service (passport, driving license, ration card) and the city. For example: 'Where do I apply for a passport in Chennai?'";

pub const LOOKUP_FAILED: &str =
    "Sorry, I encountered an error while searching for office information. Please try again later.";

pub fn not_found(service_type: &str, city: &str) -> String {
    format!(
        "Sorry, I couldn't find information about {} services in {}. Please check if the service and city are correctly specified.",
        service_type, city
    )
}

pub fn office_details(office: &OfficeRecord) -> String {
    format!(
        "*{}*\n\n📍 *Address*: {}\n⏰ *Timings*: {}\n📞 *Contact*: {}\n🌐 *Website*: {}\n📍 *Map*: {}",
        office.office_name,
        office.address,
        office.timings,
        office.contact_number,
        office.website,
        office.map_link
    )
}

pub fn office_found(service_type: &str, city: &str, office: &OfficeRecord) -> String {
    format!(
        "Here's where you can apply for a {} in {}:\n\n{}",
        service_type,
        city,
        office_details(office)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_found_layout() {
        let office = OfficeRecord {
            office_name: "RPO Chennai".to_string(),
            address: "Anna Salai".to_string(),
            timings: "9-5".to_string(),
            contact_number: "044-1234".to_string(),
            website: "https://passportindia.gov.in".to_string(),
            map_link: "https://maps.example/rpo".to_string(),
            service_type: "passport".to_string(),
            city: "chennai".to_string(),
        };
        let text = office_found("passport", "chennai", &office);
        assert_eq!(
            text,
            "Here's where you can apply for a passport in chennai:\n\n\
             *RPO Chennai*\n\n\
             📍 *Address*: Anna Salai\n\
             ⏰ *Timings*: 9-5\n\
             📞 *Contact*: 044-1234\n\
             🌐 *Website*: https://passportindia.gov.in\n\
             📍 *Map*: https://maps.example/rpo"
        );
    }

    #[test]
    fn test_not_found_text() {
        assert_eq!(
            not_found("pan card", "delhi"),
            "Sorry, I couldn't find information about pan card services in delhi. Please check if the service and city are correctly specified."
        );
    }
}
