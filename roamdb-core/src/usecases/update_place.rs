use super::prelude::*;

#[derive(Debug, Clone)]
pub struct UpdatePlace {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub description: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub contact: Option<Contact>,
}

pub fn update_place<R: PlaceRepo>(repo: &R, actor: &Actor, id: &str, p: UpdatePlace) -> Result<Place> {
    let UpdatePlace {
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
    let old = repo.get_place(id)?;
    let place = Place {
        id: old.id,
        name,
        address,
        pos,
        description,
        category: category.into(),
        image_url,
        contact: contact.filter(|c| !c.is_empty()),
        favorite_count: old.favorite_count,
        created_at: old.created_at,
        updated_at: Timestamp::now(),
        updated_by: Some(actor.id.clone()),
    };
    repo.update_place(&place)?;
    Ok(place)
}
