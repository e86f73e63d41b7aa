use jtree_core::{Error, Kind, Value, bool_or, number_or, path, str_or, yaml};

fn saved(value: &Value) -> String {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("test.yml");
    yaml::save(Some(value), &p).expect("save");
    std::fs::read_to_string(&p).unwrap()
}

#[test]
fn construct_and_drop_every_kind() {
    for kind in [
        Kind::None,
        Kind::Number,
        Kind::Bool,
        Kind::String,
        Kind::Array,
        Kind::Object,
    ] {
        let v = Value::new(kind);
        assert_eq!(v.kind(), kind);
        drop(v);
    }
    let absent: Option<Value> = None;
    drop(absent);

    assert_eq!(number_or(Some(&Value::new(Kind::Number)), 1.0), 0.0);
    assert!(!bool_or(Some(&Value::new(Kind::Bool)), true));
    assert_eq!(str_or(Some(&Value::new(Kind::String)), "x"), "");
}

#[test]
fn typed_reads_default_on_mismatch_or_absent() {
    let n = Value::from(3.14);
    let s = Value::try_string("hello").unwrap();
    let b = Value::from(true);
    assert_eq!(number_or(Some(&n), 0.0), 3.14);
    assert_eq!(str_or(Some(&s), "def"), "hello");
    assert!(bool_or(Some(&b), false));

    assert_eq!(number_or(Some(&s), 7.0), 7.0);
    assert_eq!(str_or(Some(&n), "def"), "def");
    assert!(!bool_or(Some(&n), false));
    assert_eq!(number_or(None, 80.0), 80.0);
}

#[test]
fn scene_build_config_tree() {
    let mut json = Value::new(Kind::Object);
    let basic = json.add_member("basic", Value::new(Kind::Object)).unwrap();
    basic.add_member("enable", Value::from(true)).unwrap();
    basic.add_member("port", Value::from(389)).unwrap();
    basic.add_member("ip", Value::from("200.200.3.61")).unwrap();

    let basic = json.get_member("basic").unwrap().unwrap().object().unwrap();
    assert!(basic.bool_or("enable", false));
    assert_eq!(basic.number_or("port", 0.0), 389.0);
    assert_eq!(basic.str_or("ip", ""), "200.200.3.61");
}

#[test]
fn object_member_roundtrip_and_duplicates() {
    let mut obj = Value::new(Kind::Object);
    obj.add_member("port", Value::from(80)).unwrap();
    obj.add_member("active", Value::from(true)).unwrap();
    assert_eq!(
        obj.get_member("port").unwrap(),
        Some(&Value::Number(80.0))
    );

    let err = obj.add_member("port", Value::from(8080)).unwrap_err();
    assert!(matches!(err, Error::DuplicateKey(k) if k == "port"));
    let o = obj.object().unwrap();
    assert_eq!(o.number_or("port", 0.0), 80.0);
    assert_eq!(o.len(), 2);
    assert_eq!(o.keys().collect::<Vec<_>>(), ["port", "active"]);
}

#[test]
fn object_rejects_bad_keys() {
    let mut obj = Value::new(Kind::Object);
    for key in ["", "1abc", "a b", "a.b", "x[0]"] {
        assert!(
            matches!(obj.add_member(key, Value::None), Err(Error::InvalidKey(_))),
            "accepted {key:?}"
        );
    }
    for key in ["_", "a-b", "A_1", "dns-2"] {
        obj.add_member(key, Value::None).unwrap();
    }
}

#[test]
fn wrong_variant_is_error_return() {
    let mut arr = Value::new(Kind::Array);
    assert!(matches!(
        arr.add_member("k", Value::from(1)),
        Err(Error::WrongKind {
            expected: Kind::Object,
            found: Kind::Array
        })
    ));
    let mut num = Value::from(1);
    assert!(matches!(
        num.add_element(Value::from(1)),
        Err(Error::WrongKind { .. })
    ));
    assert!(num.get_member("k").is_err());
    assert!(num.get_element(0).is_err());
    assert!(num.object_mut().map(|o| o.set_bool("key", true)).is_err());
}

#[test]
fn object_setters_create_update_and_conflict() {
    let mut v = Value::new(Kind::Object);
    let obj = v.object_mut().unwrap();
    obj.set_str("name", "Alice").unwrap();
    obj.set_number("age", 30.0).unwrap();
    obj.set_str("name", "Alice").unwrap();
    assert_eq!(obj.str_or("name", ""), "Alice");
    assert_eq!(obj.number_or("age", 0.0), 30.0);

    obj.set_bool("enabled", true).unwrap();
    assert!(obj.bool_or("enabled", false));
    obj.set_bool("enabled", false).unwrap();
    assert!(!obj.bool_or("enabled", true));

    let err = obj.set_bool("name", true).unwrap_err();
    assert!(matches!(
        err,
        Error::TypeConflict {
            expected: Kind::Bool,
            found: Kind::String,
            ..
        }
    ));
    assert_eq!(obj.str_or("name", ""), "Alice");
    assert_eq!(obj.len(), 3);
}

#[test]
fn object_getters_default_on_missing_or_wrong_kind() {
    let mut v = Value::new(Kind::Object);
    let obj = v.object_mut().unwrap();
    obj.set_str("ip", "200.200.3.61").unwrap();
    obj.set_number("port", 389.0).unwrap();

    assert_eq!(obj.str_or("ip2", "default"), "default");
    assert_eq!(obj.str_or("port", "default"), "default");
    assert_eq!(obj.number_or("ip", 80.0), 80.0);
    assert_eq!(obj.number_or("nothing", 80.0), 80.0);
    assert!(obj.bool_or("ip", true));
    assert!(!obj.bool_or("nothing", false));
}

#[test]
fn array_push_and_order() {
    let mut v = Value::new(Kind::Array);
    for i in 0..10 {
        v.add_element(Value::from(i)).unwrap();
    }
    let arr = v.array().unwrap();
    assert_eq!(arr.len(), 10);
    for i in 0..10 {
        assert_eq!(arr.number_or(i, -1.0), i as f64);
    }
    assert!(arr.get(10).is_none());
    assert_eq!(arr.number_or(999, 0.0), 0.0);
}

#[test]
fn array_typed_helpers() {
    let mut v = Value::new(Kind::Array);
    let arr = v.array_mut().unwrap();
    arr.push_bool(true).unwrap();
    arr.push_bool(false).unwrap();
    arr.push_str("not bool").unwrap();
    arr.push_number(123.0).unwrap();

    assert_eq!(arr.len(), 4);
    assert!(arr.bool_or(0, false));
    assert!(!arr.bool_or(1, true));
    assert!(!arr.bool_or(2, false));
    assert!(!arr.bool_or(3, false));
    assert!(!arr.bool_or(4, false));
    assert_eq!(arr.str_or(2, ""), "not bool");
    assert_eq!(arr.number_or(3, 0.0), 123.0);

    assert!(Value::from("not array").array_mut().is_err());
}

#[test]
fn nested_access() {
    let mut root = Value::new(Kind::Object);
    let services = root.add_member("services", Value::new(Kind::Array)).unwrap();
    let service = services.add_element(Value::new(Kind::Object)).unwrap();
    service.add_member("port", Value::from(80)).unwrap();

    let port = root
        .get_member("services")
        .unwrap()
        .unwrap()
        .get_element(0)
        .unwrap()
        .unwrap()
        .object()
        .unwrap()
        .number_or("port", 0.0);
    assert_eq!(port, 80.0);
}

#[test]
fn path_set_then_get() {
    let mut root = Value::new(Kind::Object);
    path::upsert(&mut root, "basic", Value::new(Kind::Object)).unwrap();
    path::upsert(&mut root, "basic.dns", Value::new(Kind::Array)).unwrap();
    path::upsert(&mut root, "basic.dns[0]", Value::from("200.200.0.1")).unwrap();
    path::upsert(&mut root, "basic.dns[1]", Value::from("200.0.0.254")).unwrap();

    path::set(&mut root, "basic.dns[1]", Value::from("10.0.0.1")).unwrap();
    let got = path::get(&root, "basic.dns[1]").unwrap();
    assert_eq!(got, Some(&Value::from("10.0.0.1")));

    assert!(path::get(&root, "nonexistent").unwrap().is_none());
    let scalar = Value::from(42);
    assert!(std::ptr::eq(path::get(&scalar, "").unwrap().unwrap(), &scalar));
}

#[test]
fn remove_members_and_elements() {
    let mut root = Value::new(Kind::Object);
    let list = root.add_member("list", Value::new(Kind::Array)).unwrap();
    list.add_element(Value::from("a")).unwrap();
    list.add_element(Value::from("b")).unwrap();
    root.add_member("flag", Value::from(true)).unwrap();

    let list = root.pointer_mut("list").unwrap().unwrap().array_mut().unwrap();
    assert_eq!(list.remove(0), Some(Value::from("a")));
    assert_eq!(list.remove(5), None);
    assert_eq!(list.str_or(0, ""), "b");

    let obj = root.object_mut().unwrap();
    assert_eq!(obj.remove("flag"), Some(Value::from(true)));
    assert!(obj.remove("flag").is_none());
    // the key is free again once removed
    obj.insert("flag", Value::from(false)).unwrap();
    assert_eq!(yaml::to_string(&root), "list:\n  - b\nflag: false");
}

#[test]
fn path_replace_consumes_value_on_failure() {
    let mut root = Value::new(Kind::Object);
    root.add_member("port", Value::from(1)).unwrap();
    let err = root.replace("port[0]", Value::from("gone")).unwrap_err();
    match err {
        Error::PathSyntax { path, offset, .. } => {
            assert_eq!(path, "port[0]");
            assert_eq!(offset, 4);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        root.replace("ip", Value::from("x")),
        Err(Error::PathNotFound(_))
    ));
    assert_eq!(path::number_at(&root, "port", 0.0), 1.0);
}

#[test]
fn save_str() {
    assert_eq!(saved(&Value::from("hello world")), "hello world");
}

#[test]
fn save_special_str() {
    assert_eq!(saved(&Value::from("hello\nworld")), "hello\\nworld");
}

#[test]
fn save_obj() {
    let mut json = Value::new(Kind::Object);
    json.add_member("key", Value::from("hello")).unwrap();
    json.add_member("name", Value::from("world")).unwrap();
    assert_eq!(saved(&json), "key: hello\nname: world");
}

#[test]
fn save_none_outputs_null() {
    assert_eq!(saved(&Value::new(Kind::None)), "null");
}

#[test]
fn save_arrays() {
    assert_eq!(saved(&Value::new(Kind::Array)), "[]");

    let mut arr = Value::new(Kind::Array);
    arr.add_element(Value::from(42)).unwrap();
    arr.add_element(Value::from(3.14)).unwrap();
    assert_eq!(saved(&arr), "\n- 42\n- 3.14");
}

#[test]
fn save_full_config() {
    let mut json = Value::new(Kind::Object);
    let basic = json.add_member("basic", Value::new(Kind::Object)).unwrap();
    basic.add_member("enable", Value::from(true)).unwrap();
    basic.add_member("port", Value::from(389)).unwrap();
    basic.add_member("fd", Value::from(-1)).unwrap();
    let dns = basic.add_member("dns", Value::new(Kind::Array)).unwrap();
    dns.add_element(Value::from("200.200.0.1")).unwrap();
    let advance = json.add_member("advance", Value::new(Kind::Object)).unwrap();
    let pool = advance.add_member("portpool", Value::new(Kind::Array)).unwrap();
    pool.add_element(Value::from(130)).unwrap();
    pool.add_element(Value::from(131)).unwrap();
    advance.add_member("value", Value::from(3.14)).unwrap();

    let expected = "\
basic:
  enable: true
  port: 389
  fd: -1
  dns:
    - 200.200.0.1
advance:
  portpool:
    - 130
    - 131
  value: 3.14";
    assert_eq!(saved(&json), expected);
    assert_eq!(yaml::to_string(&json), expected);
}

#[test]
fn save_reports_failures() {
    assert!(matches!(yaml::save(None, "test.yml"), Err(Error::NoRoot)));

    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("missing").join("out.yml");
    let err = Value::from(1).save(&bad).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("out.yml");
    std::fs::write(&p, "previous content that is longer").unwrap();
    Value::from(7).save(&p).unwrap();
    assert_eq!(std::fs::read_to_string(&p).unwrap(), "7");
}

#[test]
fn load_is_a_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("in.yml");
    assert!(matches!(yaml::load(&p), Err(Error::Open { .. })));
    std::fs::write(&p, "key: value").unwrap();
    assert!(matches!(yaml::load(&p), Err(Error::Unsupported(_))));
}
