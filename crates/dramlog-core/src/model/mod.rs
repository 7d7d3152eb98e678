pub mod bottle;
pub mod record;
pub mod reviewer;

pub use bottle::{
    BottleDetail, BottleKey, BottleSummary, BottleTasting, CatalogueBottle, StarDistribution,
};
pub use record::{
    ConsumerScoring, Contributor, Dates, Notes, PermissionStatus, Score, ServeStyle, SourceAsset,
    SourceBlock, SourcePermission, TastingBlock, TastingRecord, Tier, Whisky,
};
pub use reviewer::{ExpertTasting, Reviewer, ReviewerIndexEntry, ReviewerLink, ReviewersIndex};
