// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn sql(text: &str) -> Command {
    Command::new(
        Statement::new(text),
        "sql",
        CommandKind::Sql {
            statement: text.to_string(),
        },
    )
}

#[yare::parameterized(
    drop_table      = { "drop table t", true },
    delete          = { "DELETE FROM t WHERE a = 1", true },
    drop_partition  = { "alter table t drop partition (ds='1')", true },
    add_partition   = { "alter table t add partition (ds='1')", false },
    alter_view      = { "alter view v drop partition", false },
    select          = { "select * from t", false },
    insert          = { "insert into t select 1", false },
)]
fn sql_confirmation(text: &str, expected: bool) {
    assert_eq!(sql(text).needs_confirmation(), expected);
}

#[yare::parameterized(
    put_policy   = { "put policy /tmp/p.json", true },
    get_policy   = { "get policy", false },
    remove_user  = { "remove user bob", true },
    purge        = { "purge all", true },
    grant        = { "grant select on table t to user bob", false },
)]
fn security_confirmation(text: &str, expected: bool) {
    let command = Command::new(
        Statement::new(text),
        "security",
        CommandKind::Security {
            statement: text.to_string(),
        },
    );
    assert_eq!(command.needs_confirmation(), expected);
}

#[test]
fn drop_resource_and_model_confirm() {
    let resource = Command::new(
        Statement::new("drop resource a.jar"),
        "drop_resource",
        CommandKind::DropResource { name: "a.jar".into() },
    );
    let model = Command::new(
        Statement::new("drop offlinemodel m"),
        "drop_offline_model",
        CommandKind::DropOfflineModel {
            name: "m".into(),
            if_exists: false,
        },
    );
    assert!(resource.needs_confirmation());
    assert!(model.needs_confirmation());
}

#[test]
fn local_commands_never_confirm() {
    let command = Command::new(Statement::new("whoami"), "whoami", CommandKind::WhoAmI);
    assert!(!command.needs_confirmation());
}
