#![allow(dead_code)]

use chrono::NaiveDate;
use website_lib::quote::{OrganizationRequest, QuoteRequest};

pub fn quote_request(trip_id: i32) -> QuoteRequest {
    QuoteRequest {
        first_name: "Ana".to_owned(),
        last_name: "Silva".to_owned(),
        email: "ana@school.example".to_owned(),
        phone: String::new(),
        password: "hunter22".to_owned(),
        organization: OrganizationRequest {
            name: "Lincoln High".to_owned(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            phone: String::new(),
            education_department: None,
        },
        trip_id,
        number_of_students: 20,
        number_of_adults: 2,
        departure_date: NaiveDate::from_ymd_opt(2017, 5, 1).unwrap(),
        return_date: NaiveDate::from_ymd_opt(2017, 5, 8).unwrap(),
        departure_location: "Boston".to_owned(),
        comments: String::new(),
    }
}
