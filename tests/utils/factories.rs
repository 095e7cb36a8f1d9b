/// Fixture factories for the catalog tables
///
/// Rows are written with plain SQL so the fixtures exercise the same schema
/// the migrations create, independent of the crate's own models.
use catalog_relations::modules::relationships::RelationshipType;
use diesel::sql_types::{BigInt, Nullable, Text, Varchar};
use diesel::{sql_query, PgConnection, QueryableByName, RunQueryDsl};

#[derive(QueryableByName)]
struct InsertedId {
    #[diesel(sql_type = BigInt)]
    id: i64,
}

pub struct DataEntityFactory {
    oddrn: String,
    external_name: Option<String>,
}

impl DataEntityFactory {
    pub fn new(oddrn: &str) -> Self {
        Self {
            oddrn: oddrn.to_string(),
            external_name: None,
        }
    }

    pub fn external_name(mut self, name: &str) -> Self {
        self.external_name = Some(name.to_string());
        self
    }

    pub fn insert(self, conn: &mut PgConnection) -> i64 {
        sql_query(
            "INSERT INTO data_entity (oddrn, external_name) VALUES ($1, $2) RETURNING id",
        )
        .bind::<Varchar, _>(self.oddrn)
        .bind::<Nullable<Varchar>, _>(self.external_name)
        .get_result::<InsertedId>(conn)
        .expect("Failed to insert data entity")
        .id
    }
}

pub struct RelationshipFactory {
    owner_id: i64,
    source: Option<String>,
    target: Option<String>,
    relationship_type: RelationshipType,
}

impl RelationshipFactory {
    pub fn owned_by(owner_id: i64) -> Self {
        Self {
            owner_id,
            source: None,
            target: None,
            relationship_type: RelationshipType::DataFlow,
        }
    }

    pub fn between(mut self, source: &str, target: &str) -> Self {
        self.source = Some(source.to_string());
        self.target = Some(target.to_string());
        self
    }

    pub fn of_type(mut self, relationship_type: RelationshipType) -> Self {
        self.relationship_type = relationship_type;
        self
    }

    pub fn insert(self, conn: &mut PgConnection) -> i64 {
        sql_query(
            "INSERT INTO relationships \
             (data_entity_id, source_dataset_oddrn, target_dataset_oddrn, relationship_type) \
             VALUES ($1, $2, $3, $4::relationship_type) RETURNING id",
        )
        .bind::<BigInt, _>(self.owner_id)
        .bind::<Nullable<Varchar>, _>(self.source)
        .bind::<Nullable<Varchar>, _>(self.target)
        .bind::<Text, _>(self.relationship_type.db_value())
        .get_result::<InsertedId>(conn)
        .expect("Failed to insert relationship")
        .id
    }
}
