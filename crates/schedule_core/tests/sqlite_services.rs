mod common;

use chrono::{Duration, NaiveDateTime};
use common::at;
use rusqlite::{params, Connection};
use schedule_core::db::open_db_in_memory;
use schedule_core::{
    EntityId, ErrorKind, Group, GroupRepository, GroupService, Lector, LectorService,
    RepoError, Repository, SqliteGroupRepository, SqliteLectorRepository,
};

fn insert_lesson(
    conn: &Connection,
    group_id: EntityId,
    lector_id: EntityId,
    start: NaiveDateTime,
) {
    conn.execute(
        "INSERT INTO lessons (subject, group_id, lector_id, start_time, end_time)
         VALUES ('Algebra', ?1, ?2, ?3, ?4);",
        params![group_id, lector_id, start, start + Duration::minutes(90)],
    )
    .unwrap();
}

#[test]
fn group_crud_roundtrip_through_service() {
    let conn = open_db_in_memory().unwrap();
    let service = GroupService::with_default_validator(SqliteGroupRepository::new(&conn));

    assert!(service.create(&Group::new("CS-101")).unwrap());
    assert!(service.create(&Group::new("CS-102")).unwrap());

    let groups = service.get_all().unwrap();
    assert_eq!(
        groups,
        vec![Group::with_id(1, "CS-101"), Group::with_id(2, "CS-102")]
    );

    assert!(service.update(&Group::with_id(2, "CS-202")).unwrap());
    assert_eq!(service.get_by_id(2).unwrap().name, "CS-202");

    assert!(service.delete(1).unwrap());
    assert_eq!(
        service.get_by_id(1).unwrap_err().kind(),
        ErrorKind::NoSuchEntity
    );
}

#[test]
fn empty_tables_report_no_such_entity() {
    let conn = open_db_in_memory().unwrap();
    let groups = GroupService::with_default_validator(SqliteGroupRepository::new(&conn));
    let lectors = LectorService::with_default_validator(SqliteLectorRepository::new(&conn));

    assert_eq!(groups.get_all().unwrap_err().kind(), ErrorKind::NoSuchEntity);
    assert_eq!(lectors.get_all().unwrap_err().kind(), ErrorKind::NoSuchEntity);
    assert_eq!(groups.delete(8).unwrap_err().kind(), ErrorKind::NoSuchEntity);
    assert_eq!(
        lectors
            .update(&Lector::with_id(42, "Alan", "Turing"))
            .unwrap_err()
            .kind(),
        ErrorKind::NoSuchEntity
    );
}

#[test]
fn duplicate_group_name_is_a_service_failure() {
    let conn = open_db_in_memory().unwrap();
    let service = GroupService::with_default_validator(SqliteGroupRepository::new(&conn));
    service.create(&Group::new("CS-101")).unwrap();

    let err = service.create(&Group::new("CS-101")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ServiceFailure);
    assert!(matches!(err.repo_cause(), Some(RepoError::Db(_))));
}

#[test]
fn lector_crud_trims_names() {
    let conn = open_db_in_memory().unwrap();
    let service = LectorService::with_default_validator(SqliteLectorRepository::new(&conn));

    assert!(service.create(&Lector::new(" Grace ", "Hopper")).unwrap());

    let stored = service.get_by_id(1).unwrap();
    assert_eq!(stored, Lector::with_id(1, "Grace", "Hopper"));
}

#[test]
fn lessons_for_group_counts_only_that_group() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGroupRepository::new(&conn);
    repo.create(&Group::new("CS-101")).unwrap();
    repo.create(&Group::new("CS-102")).unwrap();
    SqliteLectorRepository::new(&conn)
        .create(&Lector::new("Ada", "Lovelace"))
        .unwrap();
    insert_lesson(&conn, 1, 1, at(2, 8));
    insert_lesson(&conn, 1, 1, at(3, 8));
    insert_lesson(&conn, 2, 1, at(3, 10));

    let service = GroupService::with_default_validator(&repo);

    assert_eq!(service.lessons_for_group(1).unwrap(), 2);
    assert_eq!(service.lessons_for_group(2).unwrap(), 1);
}

#[test]
fn lessons_for_group_without_lessons_is_zero_but_unknown_group_is_missing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteGroupRepository::new(&conn);
    repo.create(&Group::new("CS-101")).unwrap();

    assert_eq!(repo.lessons_by_id(1).unwrap(), 0);

    let service = GroupService::with_default_validator(&repo);
    assert_eq!(
        service.lessons_for_group(99).unwrap_err().kind(),
        ErrorKind::NoSuchEntity
    );
}

#[test]
fn lessons_for_lector_uses_half_open_interval() {
    let conn = open_db_in_memory().unwrap();
    SqliteGroupRepository::new(&conn)
        .create(&Group::new("CS-101"))
        .unwrap();
    let repo = SqliteLectorRepository::new(&conn);
    repo.create(&Lector::new("Ada", "Lovelace")).unwrap();
    insert_lesson(&conn, 1, 1, at(2, 8));
    insert_lesson(&conn, 1, 1, at(2, 10));
    insert_lesson(&conn, 1, 1, at(2, 12));

    let service = LectorService::with_default_validator(&repo);

    assert_eq!(service.lessons_for_lector(at(2, 8), at(2, 12)).unwrap(), 2);
    assert_eq!(service.lessons_for_lector(at(2, 0), at(3, 0)).unwrap(), 3);
    assert_eq!(
        service
            .lessons_for_lector(at(4, 0), at(5, 0))
            .unwrap_err()
            .kind(),
        ErrorKind::NoSuchEntity
    );
    assert_eq!(
        service
            .lessons_for_lector(at(3, 0), at(2, 0))
            .unwrap_err()
            .kind(),
        ErrorKind::NoSuchEntity
    );
}

#[test]
fn broken_storage_surfaces_as_service_failure() {
    let conn = open_db_in_memory().unwrap();
    SqliteGroupRepository::new(&conn)
        .create(&Group::new("CS-101"))
        .unwrap();
    conn.execute_batch("DROP TABLE lessons;").unwrap();

    let groups = GroupService::with_default_validator(SqliteGroupRepository::new(&conn));
    let lectors = LectorService::with_default_validator(SqliteLectorRepository::new(&conn));

    let err = groups.lessons_for_group(1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceFailure);
    assert!(matches!(err.repo_cause(), Some(RepoError::Db(_))));

    let err = lectors
        .lessons_for_lector(at(2, 0), at(3, 0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceFailure);
}

#[test]
fn deleting_group_cascades_to_lessons() {
    let conn = open_db_in_memory().unwrap();
    let groups = SqliteGroupRepository::new(&conn);
    groups.create(&Group::new("CS-101")).unwrap();
    SqliteLectorRepository::new(&conn)
        .create(&Lector::new("Ada", "Lovelace"))
        .unwrap();
    insert_lesson(&conn, 1, 1, at(2, 8));

    let service = LectorService::with_default_validator(SqliteLectorRepository::new(&conn));
    assert_eq!(service.lessons_for_lector(at(2, 0), at(3, 0)).unwrap(), 1);

    groups.delete(1).unwrap();

    assert_eq!(
        service
            .lessons_for_lector(at(2, 0), at(3, 0))
            .unwrap_err()
            .kind(),
        ErrorKind::NoSuchEntity
    );
}
