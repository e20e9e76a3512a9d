//! SeaORM entities for database tables

/// Artists table entity
pub mod artist {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "artists")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        pub label: String,

        pub is_on_tour: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with albums
        #[sea_orm(has_many = "super::album::Entity")]
        Albums,
    }

    impl Related<super::album::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Albums.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Albums table entity
pub mod album {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "albums")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        /// Foreign key to artists
        pub artist_id: i32,

        /// Canonical genre name
        pub genre: String,

        pub year: i32,

        /// Decimal rendered as text so SQLite keeps the exact scale
        pub cost: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::artist::Entity",
            from = "Column::ArtistId",
            to = "super::artist::Column::Id"
        )]
        Artist,
    }

    impl Related<super::artist::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Artist.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
