//! The quote requests sent by the customers.

use chrono::NaiveDate;
use entity::{customer, organization, quote};
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, ConnectionTrait,
    DatabaseTransaction, EntityTrait, QueryFilter as _, TransactionTrait,
};
use serde::Deserialize;

use crate::{
    error::{ValidationError, WebsiteError, WebsiteResult},
    must, password, sync,
};

/// The organization a quote is requested for.
#[derive(Deserialize, Debug, Clone)]
#[allow(missing_docs)]
pub struct OrganizationRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub phone: String,
    pub education_department: Option<String>,
}

/// A quote request, as sent by a customer.
#[derive(Deserialize, Clone)]
#[allow(missing_docs)]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// The password of the customer account, only used when the account is created.
    pub password: String,
    pub organization: OrganizationRequest,
    pub trip_id: i32,
    pub number_of_students: i32,
    pub number_of_adults: i32,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub departure_location: String,
    #[serde(default)]
    pub comments: String,
}

// The password must never be logged.
impl std::fmt::Debug for QuoteRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteRequest")
            .field("email", &self.email)
            .field("organization", &self.organization.name)
            .field("trip_id", &self.trip_id)
            .field("departure_date", &self.departure_date)
            .field("return_date", &self.return_date)
            .finish_non_exhaustive()
    }
}

impl QuoteRequest {
    /// Checks the fields of the request, without querying the database.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
            ("organization", &self.organization.name),
            ("departure_location", &self.departure_location),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::Blank(name));
            }
        }

        match self.email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => (),
            _ => return Err(ValidationError::InvalidEmail(self.email.clone())),
        }

        if self.number_of_students < 0 {
            return Err(ValidationError::Negative("number_of_students"));
        }
        if self.number_of_adults < 0 {
            return Err(ValidationError::Negative("number_of_adults"));
        }

        if self.return_date < self.departure_date {
            return Err(ValidationError::ReturnBeforeDeparture);
        }

        Ok(())
    }
}

async fn customer_id(txn: &DatabaseTransaction, req: &QuoteRequest) -> WebsiteResult<i32> {
    let email = req.email.trim().to_lowercase();
    if let Some(customer) = customer::Entity::find()
        .filter(customer::Column::Email.eq(email.as_str()))
        .one(txn)
        .await?
    {
        return Ok(customer.id);
    }

    let customer = customer::ActiveModel {
        first_name: Set(req.first_name.clone()),
        last_name: Set(req.last_name.clone()),
        email: Set(email),
        phone: Set(req.phone.clone()),
        password: Set(password::hash_password(&req.password)?),
        ..Default::default()
    }
    .insert(txn)
    .await?;
    Ok(customer.id)
}

async fn organization_id(txn: &DatabaseTransaction, req: &OrganizationRequest) -> WebsiteResult<i32> {
    let name = req.name.trim();
    if let Some(organization) = organization::Entity::find()
        .filter(organization::Column::Name.eq(name))
        .one(txn)
        .await?
    {
        return Ok(organization.id);
    }

    let organization = organization::ActiveModel {
        name: Set(name.to_owned()),
        address: Set(req.address.clone()),
        city: Set(req.city.clone()),
        state: Set(req.state.clone()),
        zip_code: Set(req.zip_code.clone()),
        phone: Set(req.phone.clone()),
        education_department: Set(req.education_department.clone()),
        ..Default::default()
    }
    .insert(txn)
    .await?;
    Ok(organization.id)
}

/// Saves a quote request.
///
/// The customer is found by email, compared in lowercase, and the organization by name, and
/// both are created if missing.
#[tracing::instrument(skip(conn))]
pub async fn request_quote<C: TransactionTrait + ConnectionTrait>(
    conn: &C,
    req: QuoteRequest,
) -> WebsiteResult<quote::Model> {
    req.validate()?;

    let trip = must::have_trip(conn, req.trip_id).await?;
    if trip.draft {
        return Err(ValidationError::TripDraft(trip.id).into());
    }

    let quote = sync::transaction(conn, async |txn: &DatabaseTransaction| {
        let customer_id = customer_id(txn, &req).await?;
        let organization_id = organization_id(txn, &req.organization).await?;

        let quote = quote::ActiveModel {
            customer_id: Set(customer_id),
            organization_id: Set(organization_id),
            trip_id: Set(trip.id),
            number_of_students: Set(req.number_of_students),
            number_of_adults: Set(req.number_of_adults),
            departure_date: Set(req.departure_date),
            return_date: Set(req.return_date),
            departure_location: Set(req.departure_location.clone()),
            comments: Set(req.comments.clone()),
            reference_file: Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        Ok::<_, WebsiteError>(quote)
    })
    .await?;

    tracing::info!(quote_id = quote.id, "new quote request");
    Ok(quote)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{OrganizationRequest, QuoteRequest};
    use crate::error::ValidationError;

    fn request() -> QuoteRequest {
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
            trip_id: 1,
            number_of_students: 20,
            number_of_adults: 2,
            departure_date: NaiveDate::from_ymd_opt(2017, 5, 1).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2017, 5, 8).unwrap(),
            departure_location: "Boston".to_owned(),
            comments: String::new(),
        }
    }

    #[test]
    fn valid_request() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn same_day_return() {
        let mut req = request();
        req.return_date = req.departure_date;
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn refused_requests() {
        let mut req = request();
        req.first_name = " ".to_owned();
        assert_eq!(req.validate(), Err(ValidationError::Blank("first_name")));

        let mut req = request();
        req.email = "not-an-email".to_owned();
        assert!(matches!(req.validate(), Err(ValidationError::InvalidEmail(_))));

        let mut req = request();
        req.number_of_adults = -1;
        assert_eq!(
            req.validate(),
            Err(ValidationError::Negative("number_of_adults"))
        );

        let mut req = request();
        req.return_date = NaiveDate::from_ymd_opt(2017, 4, 30).unwrap();
        assert_eq!(req.validate(), Err(ValidationError::ReturnBeforeDeparture));
    }

    #[test]
    fn debug_hides_password() {
        assert!(!format!("{:?}", request()).contains("hunter22"));
    }
}
