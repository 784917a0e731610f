use serde::Serialize;
use utoipa::ToSchema;

use crate::dao::models::GameListItemEntity;

/// Game catalog entry together with the number of ads posted for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameListItem {
    pub id: String,
    pub name: String,
    pub banner_url: Option<String>,
    #[serde(rename = "_count")]
    pub count: GameCounts,
}

/// Aggregate counts attached to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GameCounts {
    pub ads: u64,
}

impl From<GameListItemEntity> for GameListItem {
    fn from(game: GameListItemEntity) -> Self {
        Self {
            id: game.id,
            name: game.name,
            banner_url: game.banner_url,
            count: GameCounts { ads: game.ad_count },
        }
    }
}
