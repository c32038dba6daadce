use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPlace {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub description: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub contact: Option<Contact>,
}

pub fn create_place<R: PlaceRepo>(repo: &R, actor: &Actor, p: NewPlace) -> Result<Place> {
    let NewPlace {
        name,
        address,
        lat,
        lng,
        description,
        category,
        image_url,
        contact,
    } = p;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let now = Timestamp::now();
    let place = Place {
        id: Id::new(),
        name,
        address,
        pos,
        description,
        category: category.into(),
        image_url,
        contact: contact.filter(|c| !c.is_empty()),
        favorite_count: 0,
        created_at: now,
        updated_at: now,
        updated_by: Some(actor.id.clone()),
    };
    log::debug!("Creating new place {} ({})", place.id, place.name);
    repo.create_place(place.clone())?;
    Ok(place)
}
