use super::prelude::*;

#[derive(Debug, Clone)]
pub struct PlaceStatusUpdate {
    pub opening_state: OpeningState,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub availability: Option<Availability>,
    pub available_rooms: Option<u32>,
    pub price: f64,
    pub contact: Option<String>,
}

pub fn update_place_status<D>(db: &D, place_id: &str, u: PlaceStatusUpdate) -> Result<PlaceStatus>
where
    D: PlaceRepo + PlaceStatusRepo,
{
    let PlaceStatusUpdate {
        opening_state,
        opening_time,
        closing_time,
        availability,
        available_rooms,
        price,
        contact,
    } = u;
    if !price.is_finite() || price < 0.0 {
        return Err(Error::Price);
    }
    let place = db.get_place(place_id)?;
    let old = db.get_place_status_of_place(place_id)?;
    let (availability, available_rooms) = if place.category.is_lodging() {
        (availability, available_rooms)
    } else {
        (None, None)
    };
    let status = PlaceStatus {
        id: old.id,
        place_id: old.place_id,
        opening_state,
        opening_time,
        closing_time,
        availability,
        available_rooms,
        price,
        contact,
        updated_at: Timestamp::now(),
    };
    db.update_place_status(&status)?;
    Ok(status)
}
