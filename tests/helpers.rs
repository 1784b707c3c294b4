// Shared test helpers: an in-memory resolver for building zones without the network.
//
// Names not present in a table answer "not found". Failing names answer with a
// generic resolver failure. A host without an alias is its own canonical name.

use std::collections::HashMap;
use std::net::IpAddr;

use async_trait::async_trait;
use dnsdigger::dns::Resolve;
use dnsdigger::LookupError;

/// Resolver answering from static tables.
#[derive(Default)]
pub struct StaticResolver {
    pub hosts: HashMap<String, Vec<IpAddr>>,
    pub ptrs: HashMap<IpAddr, Vec<String>>,
    pub mx: HashMap<String, Vec<(u16, String)>>,
    pub ns: HashMap<String, Vec<String>>,
    pub txt: HashMap<String, Vec<String>>,
    pub cname: HashMap<String, String>,
    /// Names (any record type) whose lookups fail with a resolver error.
    pub failing: Vec<String>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl StaticResolver {
    pub fn host(mut self, name: &str, addrs: &[&str]) -> Self {
        self.hosts.insert(
            name.to_string(),
            addrs.iter().map(|a| a.parse().expect("valid IP")).collect(),
        );
        self
    }

    pub fn ptr(mut self, addr: &str, names: &[&str]) -> Self {
        self.ptrs.insert(
            addr.parse().expect("valid IP"),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    pub fn mx(mut self, domain: &str, entries: &[(u16, &str)]) -> Self {
        self.mx.insert(
            domain.to_string(),
            entries.iter().map(|(p, h)| (*p, h.to_string())).collect(),
        );
        self
    }

    pub fn ns(mut self, domain: &str, names: &[&str]) -> Self {
        self.ns.insert(
            domain.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }

    pub fn txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt.insert(
            name.to_string(),
            records.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.cname.insert(name.to_string(), target.to_string());
        self
    }

    pub fn failing(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    fn check(&self, name: &str) -> Result<(), LookupError> {
        if self.failing.iter().any(|f| f == name) {
            return Err(LookupError::Failed(anyhow::anyhow!(
                "simulated SERVFAIL for {name}"
            )));
        }
        Ok(())
    }
}

fn found<T: Clone>(value: Option<&T>) -> Result<T, LookupError> {
    value.cloned().ok_or(LookupError::NotFound)
}

#[async_trait]
impl Resolve for StaticResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        self.check(host)?;
        found(self.hosts.get(host))
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<(u16, String)>, LookupError> {
        self.check(domain)?;
        found(self.mx.get(domain))
    }

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.check(domain)?;
        found(self.ns.get(domain))
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.check(name)?;
        found(self.txt.get(name))
    }

    async fn lookup_cname(&self, name: &str) -> Result<String, LookupError> {
        self.check(name)?;
        match self.cname.get(name) {
            Some(target) => Ok(target.clone()),
            None if self.hosts.contains_key(name) => Ok(format!("{name}.")),
            None => Err(LookupError::NotFound),
        }
    }

    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, LookupError> {
        self.check(&ip.to_string())?;
        found(self.ptrs.get(&ip))
    }
}

/// A zone modelled on a small business domain: Amazon web host, Google mail,
/// GoDaddy DNS.
#[allow(dead_code)]
pub fn hosted_domain() -> StaticResolver {
    StaticResolver::default()
        .host("example.com", &["34.194.118.33"])
        .ptr(
            "34.194.118.33",
            &["ec2-34-194-118-33.compute-1.amazonaws.com."],
        )
        .mx(
            "example.com",
            &[
                (10, "alt3.aspmx.l.google.com."),
                (5, "alt2.aspmx.l.google.com."),
                (0, "aspmx.l.google.com."),
                (5, "alt1.aspmx.l.google.com."),
                (10, "alt4.aspmx.l.google.com."),
            ],
        )
        .host("aspmx.l.google.com", &["142.250.1.27"])
        .host("alt1.aspmx.l.google.com", &["142.251.9.26"])
        .host("alt2.aspmx.l.google.com", &["142.250.152.26"])
        .host("alt3.aspmx.l.google.com", &["172.253.113.26"])
        .host("alt4.aspmx.l.google.com", &["142.250.27.27"])
        .ptr("142.250.1.27", &["yx-in-f27.1e100.net."])
        .ns(
            "example.com",
            &["ns12.domaincontrol.com.", "ns11.domaincontrol.com."],
        )
        .host("ns11.domaincontrol.com", &["97.74.102.6", "2603:5:2160::6"])
        .host("ns12.domaincontrol.com", &["173.201.70.6"])
        .txt("example.com", &["v=spf1 include:_spf.google.com ~all"])
        .txt("_dmarc.example.com", &["v=DMARC1; p=none"])
        .cname("www.example.com", "example.com.")
}
