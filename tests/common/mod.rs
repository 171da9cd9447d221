#![allow(dead_code)]

//! Shared fixtures: a three-level entity hierarchy mapped onto one sheet.

use rust_decimal::Decimal;
use sheetmap::{CellValue, FieldDescriptor, SheetEntity, TypeDescriptor, ValueKind};

/// Base-level earnings columns. `Total` is computed by the backend.
pub fn earnings_descriptor() -> TypeDescriptor {
    TypeDescriptor::builder()
        .field("pay", ValueKind::Decimal)
        .field("tips", ValueKind::Decimal)
        .field("bonus", ValueKind::Decimal)
        .push(FieldDescriptor::new("total", ValueKind::Decimal).output())
        .field("cash", ValueKind::Decimal)
        .build()
}

/// Mid-level trip columns layered on the earnings base.
pub fn trip_descriptor() -> TypeDescriptor {
    TypeDescriptor::builder()
        .chain(&earnings_descriptor())
        .field("trips", ValueKind::Int)
        .push(FieldDescriptor::new("first_trip", ValueKind::Date).header("FirstTrip"))
        .push(FieldDescriptor::new("last_trip", ValueKind::Date).header("LastTrip"))
        .build()
}

/// The full derived record, one row of the shift sheet.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShiftRow {
    pub pay: Option<Decimal>,
    pub tips: Option<Decimal>,
    pub bonus: Option<Decimal>,
    pub total: Option<Decimal>,
    pub cash: Option<Decimal>,
    pub trips: Option<i64>,
    pub first_trip: Option<String>,
    pub last_trip: Option<String>,
    pub address: Option<String>,
    pub distance: Option<Decimal>,
    pub persisted: bool,
}

impl SheetEntity for ShiftRow {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::builder()
            .chain(&trip_descriptor())
            .field("address", ValueKind::String)
            .field("distance", ValueKind::Decimal)
            .build()
    }

    fn value(&self, header: &str) -> Option<CellValue> {
        match header {
            "Pay" => self.pay.map(CellValue::Decimal),
            "Tips" => self.tips.map(CellValue::Decimal),
            "Bonus" => self.bonus.map(CellValue::Decimal),
            "Total" => self.total.map(CellValue::Decimal),
            "Cash" => self.cash.map(CellValue::Decimal),
            "Trips" => self.trips.map(CellValue::Int),
            "FirstTrip" => self.first_trip.clone().map(CellValue::Text),
            "LastTrip" => self.last_trip.clone().map(CellValue::Text),
            "Address" => self.address.clone().map(CellValue::Text),
            "Distance" => self.distance.map(CellValue::Decimal),
            _ => None,
        }
    }

    fn set_value(&mut self, header: &str, value: Option<CellValue>) {
        match (header, value) {
            ("Pay", Some(CellValue::Decimal(d))) => self.pay = Some(d),
            ("Tips", Some(CellValue::Decimal(d))) => self.tips = Some(d),
            ("Bonus", Some(CellValue::Decimal(d))) => self.bonus = Some(d),
            ("Total", Some(CellValue::Decimal(d))) => self.total = Some(d),
            ("Cash", Some(CellValue::Decimal(d))) => self.cash = Some(d),
            ("Trips", Some(CellValue::Int(i))) => self.trips = Some(i),
            ("FirstTrip", Some(CellValue::Text(s))) => self.first_trip = Some(s),
            ("LastTrip", Some(CellValue::Text(s))) => self.last_trip = Some(s),
            ("Address", Some(CellValue::Text(s))) => self.address = Some(s),
            ("Distance", Some(CellValue::Decimal(d))) => self.distance = Some(d),
            _ => {}
        }
    }

    fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    fn is_persisted(&self) -> bool {
        self.persisted
    }
}

pub fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Routes `log` output through the test harness when `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
