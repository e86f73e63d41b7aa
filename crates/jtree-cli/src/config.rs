use jtree_core::{Error, Kind, Result, Value, path};

/// Settings a background service reads from the `basic` section of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub ip: String,
    pub port: u16,
    pub enable: bool,
    pub timeout: u32,
    pub basedn: String,
    pub dns: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 80,
            enable: false,
            timeout: 10,
            basedn: String::new(),
            dns: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// `basic` and `basic.ip` are required; every other field falls back to
    /// its default when missing or of the wrong kind.
    pub fn from_tree(root: &Value) -> Result<Self> {
        let def = Self::default();
        let basic = path::get(root, "basic")?
            .filter(|v| v.kind() == Kind::Object)
            .ok_or_else(|| Error::PathNotFound("basic".to_string()))?;
        let ip = path::get(basic, "ip")?
            .and_then(Value::as_str)
            .ok_or_else(|| Error::PathNotFound("basic.ip".to_string()))?;
        let dns = match path::get(basic, "dns")? {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => def.dns.clone(),
        };
        Ok(Self {
            ip: ip.to_string(),
            port: int_at(basic, "port").unwrap_or(def.port),
            enable: path::bool_at(basic, "enable", def.enable),
            timeout: int_at(basic, "timeout").unwrap_or(def.timeout),
            basedn: path::str_at(basic, "basedn", &def.basedn).to_string(),
            dns,
        })
    }
}

// Integer field at `path`; `None` when missing, fractional or out of range
// for `T`.
fn int_at<T: TryFrom<i64>>(node: &Value, path: &str) -> Option<T> {
    let n = path::get(node, path).ok().flatten()?.as_number()?;
    if n.fract() != 0.0 || !(i64::MIN as f64..=i64::MAX as f64).contains(&n) {
        return None;
    }
    T::try_from(n as i64).ok()
}

/// The reference configuration tree used by the CLI commands.
pub fn sample_tree() -> Result<Value> {
    let mut json = Value::new(Kind::Object);

    let basic = json.add_member("basic", Value::new(Kind::Object))?;
    basic.add_member("enable", Value::from(true))?;
    basic.add_member("ip", Value::from("200.200.3.61"))?;
    basic.add_member("port", Value::from(389))?;
    basic.add_member("timeout", Value::from(10))?;
    basic.add_member("basedn", Value::from("aaa"))?;
    basic.add_member("fd", Value::from(-1))?;
    basic.add_member("maxcnt", Value::from(133333333333.0))?;
    let dns = basic.add_member("dns", Value::new(Kind::Array))?;
    dns.add_element(Value::from("200.200.0.1"))?;
    dns.add_element(Value::from("200.0.0.254"))?;

    let advance = json.add_member("advance", Value::new(Kind::Object))?;
    let adv_dns = advance.add_member("dns", Value::new(Kind::Array))?;
    for (name, ip) in [("huanan", "200.200.0.1"), ("huabei", "200.0.0.254")] {
        let entry = adv_dns.add_element(Value::new(Kind::Object))?;
        entry.add_member("name", Value::from(name))?;
        entry.add_member("ip", Value::from(ip))?;
    }
    let portpool = advance.add_member("portpool", Value::new(Kind::Array))?;
    for port in [130, 131, 132] {
        portpool.add_element(Value::from(port))?;
    }
    advance.add_member("url", Value::from("http://200.200.0.4/main"))?;
    advance.add_member("path", Value::from("/etc/sinfors"))?;
    advance.add_member("value", Value::from(3.14))?;

    Ok(json)
}
