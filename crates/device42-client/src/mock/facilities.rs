//! Facilities operations for MockDevice42Client
//!
//! Handles buildings, rooms, racks and rack mounts

use super::{envelope, envelope_short, MockDevice42Client};
use crate::error::Device42Error;
use crate::models::*;

pub async fn create_building(
    client: &MockDevice42Client,
    params: &BuildingParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut buildings = client.buildings.lock().unwrap();
    let id = buildings
        .get(&params.name)
        .and_then(|b| b.building_id)
        .unwrap_or_else(|| client.next_id());
    buildings.insert(
        params.name.clone(),
        Building {
            building_id: Some(id),
            name: params.name.clone(),
            address: params.address.clone(),
            contact_name: params.contact_name.clone(),
            contact_phone: params.contact_phone.clone(),
            notes: params.notes.clone(),
            custom_fields: vec![],
        },
    );
    Ok(envelope("Building added/updated successfully", id, &params.name))
}

pub async fn list_buildings(
    client: &MockDevice42Client,
    _reload: bool,
) -> Result<Vec<Building>, Device42Error> {
    Ok(client.buildings.lock().unwrap().values().cloned().collect())
}

pub async fn get_building_by_name(
    client: &MockDevice42Client,
    name: &str,
    _reload: bool,
) -> Result<Option<Building>, Device42Error> {
    Ok(client.buildings.lock().unwrap().get(name).cloned())
}

pub async fn create_room(
    client: &MockDevice42Client,
    params: &RoomParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut rooms = client.rooms.lock().unwrap();
    let id = rooms
        .values()
        .find(|r| r.name == params.name)
        .and_then(|r| r.room_id)
        .unwrap_or_else(|| client.next_id());
    rooms.insert(
        id,
        Room {
            room_id: Some(id),
            name: params.name.clone(),
            building: params.building.clone(),
            building_id: params.building_id,
            notes: params.notes.clone(),
            ..Room::default()
        },
    );
    Ok(envelope("Room added/updated successfully", id, &params.name))
}

pub async fn list_rooms(
    client: &MockDevice42Client,
    _reload: bool,
) -> Result<Vec<Room>, Device42Error> {
    Ok(client.rooms.lock().unwrap().values().cloned().collect())
}

pub async fn get_room_by_name(
    client: &MockDevice42Client,
    name: &str,
    _reload: bool,
) -> Result<Option<Room>, Device42Error> {
    Ok(client
        .rooms
        .lock()
        .unwrap()
        .values()
        .find(|r| r.name == name)
        .cloned())
}

pub async fn get_room(client: &MockDevice42Client, id: u64) -> Result<Room, Device42Error> {
    client
        .rooms
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| Device42Error::NotFound(format!("Room {} not found", id)))
}

pub async fn create_rack(
    client: &MockDevice42Client,
    params: &RackParams,
) -> Result<ApiMessage, Device42Error> {
    params.validate()?;
    let mut racks = client.racks.lock().unwrap();
    let id = racks
        .values()
        .find(|r| r.name == params.name)
        .and_then(|r| r.rack_id)
        .unwrap_or_else(|| client.next_id());
    racks.insert(
        id,
        Rack {
            rack_id: Some(id),
            name: params.name.clone(),
            size: Some(params.size),
            room: Some(params.room.clone()),
            building: params.building.clone(),
            room_id: params.room_id,
            numbering_start_from_bottom: params
                .numbering_start_from_bottom
                .map(|b| crate::models::yes_no(b).to_string()),
            first_number: params.first_number,
            row: params.row.clone(),
            manufacturer: params.manufacturer.clone(),
            notes: params.notes.clone(),
            ..Rack::default()
        },
    );
    Ok(envelope("rack added/updated.", id, &params.name))
}

pub async fn list_racks(
    client: &MockDevice42Client,
    _reload: bool,
) -> Result<Vec<Rack>, Device42Error> {
    Ok(client.racks.lock().unwrap().values().cloned().collect())
}

pub async fn find_racks(
    client: &MockDevice42Client,
    query: &RackQuery,
    _reload: bool,
) -> Result<Vec<Rack>, Device42Error> {
    Ok(client
        .racks
        .lock()
        .unwrap()
        .values()
        .filter(|r| query.matches(r))
        .cloned()
        .collect())
}

pub async fn get_rack(client: &MockDevice42Client, id: u64) -> Result<Rack, Device42Error> {
    client
        .racks
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| Device42Error::NotFound(format!("Rack {} not found", id)))
}

pub async fn mount_device(
    client: &MockDevice42Client,
    mount: &RackMount,
) -> Result<ApiMessage, Device42Error> {
    mount.validate()?;
    let device_id = client
        .devices
        .lock()
        .unwrap()
        .values()
        .find(|d| d.name == mount.device)
        .and_then(|d| d.device_id);

    let mut racks = client.racks.lock().unwrap();
    let rack = racks
        .get_mut(&mount.rack_id)
        .ok_or_else(|| Device42Error::NotFound(format!("Rack {} not found", mount.rack_id)))?;

    let position = match mount.position {
        SlotRequest::At(pos) => pos,
        SlotRequest::Auto => rack
            .device_slots()
            .keys()
            .last()
            .map_or(1.0, |slot| slot.0 + 1.0),
    };

    // One occupant per slot
    rack.devices
        .retain(|d| d.start_at.is_none_or(|s| Slot::new(s) != Slot::new(position)));
    rack.devices.push(RackDevice {
        device_id,
        name: Some(mount.device.clone()),
        start_at: Some(position),
        ..RackDevice::default()
    });

    let label = format!(
        "[{}] - {} -{}",
        position,
        rack.name,
        rack.room.as_deref().unwrap_or("")
    );
    Ok(envelope_short("device added or updated in the rack", 1, label))
}
