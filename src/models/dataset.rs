use super::city::City;
use super::trip::Trip;

/// Optional columns present in a city's source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub gender: bool,
    pub birth_year: bool,
}

impl Schema {
    pub fn full() -> Self {
        Self {
            gender: true,
            birth_year: true,
        }
    }
}

/// Trips of one city, in source order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub schema: Schema,
    pub trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(city: City, schema: Schema, trips: Vec<Trip>) -> Self {
        Self {
            city,
            schema,
            trips,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn has_gender(&self) -> bool {
        self.schema.gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.schema.birth_year
    }

    /// Rows `offset..offset + size`, clamped to the dataset
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}
