pub use roamdb_entities::{
    booking::*, category::*, contact::*, geo::*, id::*, journey::*, notification::*, place::*,
    place_status::*, reply::*, review::*, time::*, user::*, user_stats::*, vote::*,
};
