use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Artist {
    Table,
    Id,
    Name,
    Age,
}

#[derive(DeriveIden)]
enum Album {
    Table,
    Id,
    Name,
    Genre,
    ArtistId,
}

#[derive(DeriveIden)]
enum Track {
    Table,
    Id,
    Name,
    Duration,
    TimesPlayed,
    AlbumId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Artist::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Artist::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Artist::Age).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Can't have an Album without an Artist
        manager
            .create_table(
                Table::create()
                    .table(Album::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Album::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Album::Name).string().not_null())
                    .col(ColumnDef::new(Album::Genre).string().not_null())
                    .col(ColumnDef::new(Album::ArtistId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-album-artist_id")
                            .from(Album::Table, Album::ArtistId)
                            .to(Artist::Table, Artist::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Can't have a Track without an Album
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Track::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Track::Name).string().not_null())
                    .col(ColumnDef::new(Track::Duration).double().not_null())
                    .col(
                        ColumnDef::new(Track::TimesPlayed)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Track::AlbumId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-track-album_id")
                            .from(Track::Table, Track::AlbumId)
                            .to(Album::Table, Album::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-album-artist_id")
                    .table(Album::Table)
                    .col(Album::ArtistId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-track-album_id")
                    .table(Track::Table)
                    .col(Track::AlbumId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    // Children first, foreign keys point upwards
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Album::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await?;
        Ok(())
    }
}
