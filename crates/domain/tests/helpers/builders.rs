#![allow(dead_code)]
use ferrous_mdns_domain::{Key, RData, Record, RecordClass, RecordType, StringList};
use std::net::{Ipv4Addr, Ipv6Addr};

pub struct RecordBuilder {
    name: String,
    class: RecordClass,
    record_type: RecordType,
    ttl: Option<u32>,
    data: Option<RData>,
}

impl RecordBuilder {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            name: "host.local".to_string(),
            class: RecordClass::IN,
            record_type,
            ttl: None,
            data: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn class(mut self, class: RecordClass) -> Self {
        self.class = class;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn data(mut self, data: RData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> Record {
        let key = Key::new(&self.name, self.class, self.record_type);
        let record = match self.data {
            Some(data) => Record::with_data(&key, data),
            None => Record::new(&key),
        };
        match self.ttl {
            Some(ttl) => record.with_ttl(ttl),
            None => record,
        }
    }
}

pub fn a_record(name: &str, address: &str) -> Record {
    let address: Ipv4Addr = address.parse().unwrap();
    RecordBuilder::new(RecordType::A)
        .name(name)
        .data(RData::A(address))
        .build()
}

pub fn aaaa_record(name: &str, address: &str) -> Record {
    let address: Ipv6Addr = address.parse().unwrap();
    RecordBuilder::new(RecordType::AAAA)
        .name(name)
        .data(RData::AAAA(address))
        .build()
}

pub fn ptr_record(target: &str) -> Record {
    RecordBuilder::new(RecordType::PTR)
        .name("_http._tcp.local")
        .data(RData::PTR(target.to_string()))
        .build()
}

pub fn srv_record(priority: u16, weight: u16, port: u16, target: &str) -> Record {
    RecordBuilder::new(RecordType::SRV)
        .name("web._http._tcp.local")
        .data(RData::SRV {
            priority,
            weight,
            port,
            target: target.to_string(),
        })
        .build()
}

pub fn hinfo_record(cpu: &str, os: &str) -> Record {
    RecordBuilder::new(RecordType::HINFO)
        .data(RData::HINFO {
            cpu: cpu.to_string(),
            os: os.to_string(),
        })
        .build()
}

pub fn txt_record(strings: &[&str]) -> Record {
    RecordBuilder::new(RecordType::TXT)
        .name("web._http._tcp.local")
        .data(RData::TXT(StringList::from_strs(strings)))
        .build()
}

pub fn generic_record(code: u16, bytes: &[u8]) -> Record {
    RecordBuilder::new(RecordType::Unknown(code))
        .data(RData::Generic(bytes.to_vec()))
        .build()
}
