//! IPAM operations for MockDevice42Client
//!
//! Handles MAC addresses, IP addresses, subnets, VLANs, switch ports and
//! DNS records

use super::{envelope, envelope_short, MockDevice42Client};
use crate::client::{parent_domain, ptr_record_name};
use crate::error::Device42Error;
use crate::models::*;

pub async fn create_mac_address(
    client: &MockDevice42Client,
    params: &MacAddressParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut macs = client.mac_addresses.lock().unwrap();
    let id = macs
        .get(&params.macaddress)
        .and_then(|m| m.macaddress_id)
        .unwrap_or_else(|| client.next_id());
    macs.insert(
        params.macaddress.clone(),
        MacAddress {
            macaddress_id: Some(id),
            macaddress: params.macaddress.clone(),
            port_name: params.port_name.clone(),
            vlan_id: params.vlan_id,
            device: params.device.clone(),
        },
    );
    Ok(envelope(
        "mac address successfully added/updated",
        id,
        &params.macaddress,
    ))
}

pub async fn list_mac_addresses(
    client: &MockDevice42Client,
    _reload: bool,
) -> Result<Vec<MacAddress>, Device42Error> {
    Ok(client.mac_addresses.lock().unwrap().values().cloned().collect())
}

pub async fn get_mac_by_address(
    client: &MockDevice42Client,
    mac: &str,
    _reload: bool,
) -> Result<Option<MacAddress>, Device42Error> {
    Ok(client.mac_addresses.lock().unwrap().get(mac).cloned())
}

pub async fn create_ip_address(
    client: &MockDevice42Client,
    params: &IpAddressParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut ips = client.ip_addresses.lock().unwrap();
    let id = ips
        .get(&params.ipaddress)
        .and_then(|ip| ip.ip_id)
        .unwrap_or_else(|| client.next_id());
    ips.insert(
        params.ipaddress.clone(),
        IpAddress {
            ip_id: Some(id),
            ipaddress: params.ipaddress.clone(),
            tag: params.tag.clone(),
            subnet: params.subnet.clone(),
            subnet_id: None,
            macaddress: params.macaddress.clone(),
            kind: params.kind.clone(),
        },
    );
    Ok(envelope("ip added or updated", id, &params.ipaddress))
}

pub async fn create_subnet(
    client: &MockDevice42Client,
    params: &SubnetParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let id = client.next_id();
    let key = format!("{}/{}", params.network, params.mask_bits);
    let label = match &params.name {
        Some(name) => format!("{}-{}", name, key),
        None => key.clone(),
    };
    client.subnets.lock().unwrap().insert(key, params.clone());
    Ok(envelope_short("subnet successfully added/updated", id, label))
}

pub async fn create_vlan(
    client: &MockDevice42Client,
    params: &VlanParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let id = client.next_id();
    client.vlans.lock().unwrap().insert(params.number, params.clone());
    let label = params.name.clone().unwrap_or_else(|| params.number.to_string());
    // Four-element envelope, matching the upstream vlan message
    Ok(ApiMessage {
        code: 0,
        msg: serde_json::json!(["vlan successfully added", id, label, true]),
    })
}

pub async fn create_switchport(
    client: &MockDevice42Client,
    params: &SwitchportParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    // The upstream API allocates a fresh port id on every write, even when
    // switchport_id is given
    let id = client.next_id();
    client.switchports.lock().unwrap().insert(id, params.clone());
    Ok(envelope_short(
        "switchport successfully added/updated",
        id,
        params.port.to_string(),
    ))
}

pub async fn create_dns_record(
    client: &MockDevice42Client,
    params: &DnsRecordParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let id = client.next_id();
    let label = params.name.clone().unwrap_or_else(|| params.domain.clone());
    client.dns_records.lock().unwrap().push(params.clone());
    Ok(envelope_short("DNS record added/updated successfully", id, label))
}

pub async fn create_address_dns_records(
    client: &MockDevice42Client,
    fqdn: &str,
    ip: &str,
    nameserver: Option<&str>,
    ttl: u32,
) -> Result<(ApiMessage, ApiMessage), Device42Error> {
    let domain = parent_domain(fqdn).ok_or_else(|| {
        Device42Error::InvalidRequest(format!("\"{fqdn}\" is not a fully qualified name"))
    })?;
    let addr: std::net::Ipv4Addr = ip
        .parse()
        .map_err(|_| Device42Error::InvalidRequest(format!("\"{ip}\" is not an IPv4 address")))?;

    let forward = DnsRecordParams {
        domain: domain.to_string(),
        kind: "A".to_string(),
        nameserver: nameserver.map(str::to_string),
        name: Some(fqdn.to_string()),
        content: Some(addr.to_string()),
        ttl: Some(ttl),
        ..DnsRecordParams::default()
    };
    let forward_rsp = create_dns_record(client, &forward).await?;

    let ptr_name = ptr_record_name(addr);
    let reverse = DnsRecordParams {
        domain: parent_domain(&ptr_name).unwrap_or("in-addr.arpa").to_string(),
        kind: "PTR".to_string(),
        nameserver: nameserver.map(str::to_string),
        name: Some(ptr_name),
        content: Some(fqdn.to_string()),
        ttl: Some(ttl),
        ..DnsRecordParams::default()
    };
    let reverse_rsp = create_dns_record(client, &reverse).await?;

    Ok((forward_rsp, reverse_rsp))
}
