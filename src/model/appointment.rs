use crate::model::Status;
use crate::remote::document::{fields, DecodeError, Document, FieldValue, Fields, FromDocument};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use slice_framework::{Keyed, Patch};

/// Stored form of appointment dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A booked veterinary visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub pet_id: String,
    pub user_id: String,
    pub date: Option<DateTime<Utc>>,
    pub reason: String,
    pub vet_id: String,
    pub location: String,
    pub notes: Option<String>,
    pub status: Option<Status>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

/// Form payload for booking an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub pet_id: String,
    pub date: NaiveDate,
    pub reason: String,
    pub vet_id: String,
    pub location: String,
    pub notes: Option<String>,
}

impl NewAppointment {
    pub fn to_fields(&self, user_id: &str) -> Fields {
        fields([
            ("petId", FieldValue::from(self.pet_id.as_str())),
            ("date", FieldValue::from(self.date.format(DATE_FORMAT).to_string())),
            ("reason", FieldValue::from(self.reason.as_str())),
            ("vetId", FieldValue::from(self.vet_id.as_str())),
            ("location", FieldValue::from(self.location.as_str())),
            ("notes", FieldValue::from(self.notes.clone())),
            ("userId", FieldValue::from(user_id)),
            ("createdAt", FieldValue::ServerTimestamp),
            ("updatedAt", FieldValue::ServerTimestamp),
        ])
    }
}

impl FromDocument for Appointment {
    fn from_document(doc: &Document) -> Result<Self, DecodeError> {
        Ok(Self {
            id: doc.id.clone(),
            pet_id: doc.text("petId")?,
            user_id: doc.text("userId")?,
            date: doc.timestamp("date"),
            reason: doc.text("reason")?,
            vet_id: doc.text("vetId")?,
            location: doc.text("location")?,
            notes: doc.optional_text("notes")?,
            status: doc.optional_text("status")?.map(|s| Status::parse(&s)),
            created_at: doc.timestamp("createdAt"),
            updated_at: doc.timestamp("updatedAt"),
        })
    }
}

impl Keyed for Appointment {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Admin edit of an appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentEdit {
    pub date: NaiveDate,
    pub location: String,
    pub status: Status,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AppointmentEdit {
    pub fn new(date: NaiveDate, location: impl Into<String>, status: Status) -> Self {
        Self {
            date,
            location: location.into(),
            status,
            updated_at: None,
        }
    }

    pub fn to_fields(&self) -> Fields {
        fields([
            ("date", FieldValue::from(self.date.format(DATE_FORMAT).to_string())),
            ("location", FieldValue::from(self.location.as_str())),
            ("status", FieldValue::from(self.status.as_str())),
            ("updatedAt", FieldValue::ServerTimestamp),
        ])
    }
}

impl Patch<Appointment> for AppointmentEdit {
    fn apply(self, target: &mut Appointment) {
        target.date = midnight_utc(self.date);
        target.location = self.location;
        target.status = Some(self.status);
        if self.updated_at.is_some() {
            target.updated_at = self.updated_at;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_round_trips_through_text() {
        let booking = NewAppointment {
            pet_id: "p1".into(),
            date: NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
            reason: "checkup".into(),
            vet_id: "v1".into(),
            location: "Main St".into(),
            notes: None,
        };
        let doc = Document::new("a1", booking.to_fields("u1"));
        let appointment = Appointment::from_document(&doc).unwrap();

        assert_eq!(
            appointment.date,
            Some(Utc.with_ymd_and_hms(2024, 7, 2, 0, 0, 0).unwrap())
        );
        assert_eq!(appointment.user_id, "u1");
        assert_eq!(appointment.status, None);
    }

    #[test]
    fn test_edit_sets_status_and_location() {
        let doc = Document::new("a1", fields([("location", "Old Rd")]));
        let mut appointment = Appointment::from_document(&doc).unwrap();

        let edit = AppointmentEdit::new(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(), "New Rd", Status::Disabled);
        edit.apply(&mut appointment);

        assert_eq!(appointment.location, "New Rd");
        assert_eq!(appointment.status, Some(Status::Disabled));
        assert!(appointment.date.is_some());
    }
}
