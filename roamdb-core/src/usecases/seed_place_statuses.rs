use super::prelude::*;

pub const DEFAULT_LODGING_PRICE: f64 = 500_000.0;
pub const DEFAULT_LODGING_ROOMS: u32 = 10;

/// Backfills a default status for every place that lacks one, so each
/// place can be priced. Lodging places get a stock room inventory,
/// everything else starts free.
pub fn seed_place_statuses<D>(db: &D) -> Result<usize>
where
    D: PlaceRepo + PlaceStatusRepo,
{
    let mut seeded = 0;
    for place in db.all_places()? {
        if db.try_get_place_status_of_place(place.id.as_str())?.is_some() {
            continue;
        }
        let lodging = place.category.is_lodging();
        let status = PlaceStatus {
            id: Id::new(),
            place_id: place.id,
            opening_state: OpeningState::Open,
            opening_time: None,
            closing_time: None,
            availability: lodging.then_some(Availability::Available),
            available_rooms: lodging.then_some(DEFAULT_LODGING_ROOMS),
            price: if lodging { DEFAULT_LODGING_PRICE } else { 0.0 },
            contact: None,
            updated_at: Timestamp::now(),
        };
        db.create_place_status(status)?;
        seeded += 1;
    }
    if seeded > 0 {
        log::info!("Seeded {seeded} default place status record(s)");
    }
    Ok(seeded)
}
