use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, ItemsAndPagesNumber,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use super::{NewStudent, Page, PageRequest, SortColumn, StudentFilter};
use crate::entities::student;

/// Read and insert access to the student table over an injected connection.
#[derive(Clone, Debug)]
pub struct StudentService {
    db: DatabaseConnection,
}

impl StudentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find students matching every present criterion of `filter`, sliced
    /// into the requested page.
    ///
    /// Rows are ordered by `request.sort` followed by `id` ascending, so the
    /// default order is insertion order. A page past the end is empty.
    pub async fn find_students(
        &self,
        filter: &StudentFilter,
        request: &PageRequest,
    ) -> Result<Page<student::Model>, DbErr> {
        let mut query = student::Entity::find().filter(filter.condition());

        for order in &request.sort {
            query = query.order_by(order.column.column(), order.direction.into());
        }
        if !request.sort.iter().any(|order| order.column == SortColumn::Id) {
            query = query.order_by_asc(student::Column::Id);
        }

        let paginator = query.paginate(&self.db, request.size);
        let ItemsAndPagesNumber {
            number_of_items,
            number_of_pages,
        } = paginator.num_items_and_pages().await?;

        let content = if request.page < number_of_pages {
            paginator.fetch_page(request.page).await?
        } else {
            Vec::new()
        };

        tracing::debug!(
            ?filter,
            filtered = !filter.is_empty(),
            page = request.page,
            size = request.size,
            total = number_of_items,
            returned = content.len(),
            "Student lookup"
        );

        Ok(Page {
            content,
            total_elements: number_of_items,
            total_pages: number_of_pages,
            page: request.page,
            size: request.size,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<student::Model>, DbErr> {
        student::Entity::find_by_id(id).one(&self.db).await
    }

    pub async fn create(&self, new_student: NewStudent) -> Result<student::Model, DbErr> {
        let student = new_student.into_active_model().insert(&self.db).await?;
        tracing::info!(id = student.id, "Student created");
        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    use super::*;
    use crate::bootstrap::seed_students;
    use crate::student::SortOrder;

    async fn seeded_service() -> StudentService {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        seed_students(&db).await.unwrap();
        StudentService::new(db)
    }

    fn names(page: &Page<student::Model>) -> Vec<&str> {
        page.content
            .iter()
            .map(|s| s.name.as_deref().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn no_filter_returns_everything_in_insertion_order() {
        let service = seeded_service().await;

        let page = service
            .find_students(&StudentFilter::default(), &PageRequest::default())
            .await
            .unwrap();

        assert_eq!(names(&page), vec!["John", "Jane", "Doe"]);
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn name_filter_matches_substring() {
        let service = seeded_service().await;

        for needle in ["Jo", "jo", "OHN"] {
            let filter = StudentFilter {
                name: Some(needle.to_string()),
                ..Default::default()
            };
            let page = service
                .find_students(&filter, &PageRequest::default())
                .await
                .unwrap();
            assert_eq!(names(&page), vec!["John"], "needle {needle}");
        }
    }

    #[tokio::test]
    async fn name_filter_matches_capitalised_non_ascii_names() {
        let service = seeded_service().await;
        service.create(NewStudent::named("Élodie", 30)).await.unwrap();

        for needle in ["Él", "Élodie", "ÉLODIE", "odie"] {
            let filter = StudentFilter {
                name: Some(needle.to_string()),
                ..Default::default()
            };
            let page = service
                .find_students(&filter, &PageRequest::default())
                .await
                .unwrap();
            assert_eq!(names(&page), vec!["Élodie"], "needle {needle}");
        }
    }

    #[tokio::test]
    async fn age_filter_is_exact() {
        let service = seeded_service().await;
        let filter = StudentFilter {
            age: Some(22),
            ..Default::default()
        };

        let page = service
            .find_students(&filter, &PageRequest::default())
            .await
            .unwrap();

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name.as_deref(), Some("Jane"));
        assert_eq!(page.content[0].age, 22);
    }

    #[tokio::test]
    async fn like_wildcards_in_name_are_literal() {
        let service = seeded_service().await;
        service.create(NewStudent::named("50%_off", 30)).await.unwrap();

        for needle in ["%", "_", "0%_o"] {
            let filter = StudentFilter {
                name: Some(needle.to_string()),
                ..Default::default()
            };
            let page = service
                .find_students(&filter, &PageRequest::default())
                .await
                .unwrap();
            assert_eq!(names(&page), vec!["50%_off"], "needle {needle}");
        }
    }

    #[tokio::test]
    async fn every_returned_record_satisfies_all_criteria() {
        let service = seeded_service().await;
        service.create(NewStudent::new(1, 20, "Joan")).await.unwrap();
        service.create(NewStudent::new(2, 22, "Jon")).await.unwrap();
        service.create(NewStudent::new(2, 20, "Dana")).await.unwrap();
        service.create(NewStudent::new(2, 22, "Élodie")).await.unwrap();
        service.create(NewStudent::default()).await.unwrap();

        let everyone = service
            .find_students(&StudentFilter::default(), &PageRequest::default())
            .await
            .unwrap()
            .content;

        let names = [
            None,
            Some("J"),
            Some("jo"),
            Some("a"),
            Some("Él"),
            Some("é"),
            Some("LOD"),
            Some("zzz"),
        ];
        let ages = [None, Some(0), Some(20), Some(22)];
        let sexes = [None, Some(1), Some(2)];

        for name in names {
            for age in ages {
                for sex in sexes {
                    let filter = StudentFilter {
                        name: name.map(str::to_string),
                        age,
                        sex,
                    };
                    let page = service
                        .find_students(&filter, &PageRequest::default())
                        .await
                        .unwrap();

                    assert!(
                        page.content.iter().all(|s| filter.matches(s)),
                        "{filter:?}"
                    );
                    let expected = everyone.iter().filter(|s| filter.matches(s)).count();
                    assert_eq!(page.content.len(), expected, "{filter:?}");
                    assert_eq!(page.total_elements, expected as u64, "{filter:?}");
                }
            }
        }
    }

    #[tokio::test]
    async fn pages_slice_the_result() {
        let service = seeded_service().await;
        let filter = StudentFilter::default();

        let first = service
            .find_students(&filter, &PageRequest::new(0, 2))
            .await
            .unwrap();
        let second = service
            .find_students(&filter, &PageRequest::new(1, 2))
            .await
            .unwrap();

        assert_eq!(names(&first), vec!["John", "Jane"]);
        assert_eq!(names(&second), vec!["Doe"]);
        assert_eq!(first.total_pages, 2);
        assert!(first.is_first() && !first.is_last());
        assert!(second.is_last());
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let service = seeded_service().await;

        let page = service
            .find_students(&StudentFilter::default(), &PageRequest::new(5, 2))
            .await
            .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.page, 5);
    }

    #[tokio::test]
    async fn no_match_is_an_empty_page() {
        let service = seeded_service().await;
        let filter = StudentFilter {
            age: Some(99),
            ..Default::default()
        };

        let page = service
            .find_students(&filter, &PageRequest::default())
            .await
            .unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn sort_orders_are_applied_in_sequence() {
        let service = seeded_service().await;
        service.create(NewStudent::named("Adam", 22)).await.unwrap();

        let request = PageRequest::default()
            .sorted_by(SortOrder::desc(SortColumn::Age))
            .sorted_by(SortOrder::asc(SortColumn::Name));
        let page = service
            .find_students(&StudentFilter::default(), &request)
            .await
            .unwrap();

        assert_eq!(names(&page), vec!["Doe", "Adam", "Jane", "John"]);
    }

    #[tokio::test]
    async fn create_assigns_ids_and_find_by_id_reads_back() {
        let service = seeded_service().await;

        let created = service.create(NewStudent::new(2, 19, "Ann")).await.unwrap();
        assert_eq!(created.id, 4);

        let found = service.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(service.find_by_id(404).await.unwrap(), None);
    }
}
