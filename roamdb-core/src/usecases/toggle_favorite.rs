use super::prelude::*;

/// Adds or removes the place from the user's favorites and adjusts the
/// place's favorite count. Returns whether the place is a favorite
/// after the call.
pub fn toggle_favorite<D>(db: &D, actor: &Actor, place_id: &str) -> Result<bool>
where
    D: PlaceRepo + UserRepo,
{
    let mut place = db.get_place(place_id)?;
    let mut user = db.get_user(actor.id.as_str())?;
    let favorite = if let Some(pos) = user.favorites.iter().position(|id| id.as_str() == place_id) {
        user.favorites.remove(pos);
        place.favorite_count = place.favorite_count.saturating_sub(1);
        false
    } else {
        user.favorites.push(place.id.clone());
        place.favorite_count += 1;
        true
    };
    db.update_user(&user)?;
    db.update_place(&place)?;
    Ok(favorite)
}
