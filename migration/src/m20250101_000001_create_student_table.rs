use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::Name).string().null())
                    .col(ColumnDef::new(Student::Age).integer().not_null().default(0))
                    .col(ColumnDef::new(Student::Sex).integer().null())
                    .to_owned(),
            )
            .await?;

        // Seeding looks rows up by (name, age)
        manager
            .create_index(
                Index::create()
                    .name("idx_student_name_age")
                    .table(Student::Table)
                    .col(Student::Name)
                    .col(Student::Age)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_name_age")
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Student {
    Table,
    Id,
    Name,
    Age,
    Sex,
}
