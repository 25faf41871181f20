use availability_cell::{group_by_day, CreateSlotRequest, ScheduleService};
use shared_config::ApiConfig;
use shared_utils::format::day_label;

use crate::cli::{SlotAction, SlotArgs};
use crate::commands::AuthedContext;

pub async fn show(config: &ApiConfig) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_professional()?;

    let service = ScheduleService::new(config);
    let slots = service.my_schedule(ctx.token()).await?;

    if slots.is_empty() {
        println!("Nenhuma janela de atendimento cadastrada.");
        return Ok(());
    }

    for (day, day_slots) in group_by_day(&slots) {
        println!("{}:", day_label(day));
        for slot in day_slots {
            println!("  {}  {} - {}", slot.id, slot.start_time, slot.end_time);
        }
    }
    Ok(())
}

pub async fn slot(config: &ApiConfig, args: SlotArgs) -> anyhow::Result<()> {
    let ctx = AuthedContext::load(config)?;
    ctx.session.require_professional()?;

    let service = ScheduleService::new(config);
    match args.action {
        SlotAction::Add { day, start, end } => {
            service
                .create_slot(
                    CreateSlotRequest {
                        day_of_week: day,
                        start_time: start,
                        end_time: end,
                    },
                    ctx.token(),
                )
                .await?;
            println!("Janela criada.");
        }
        SlotAction::Remove { slot_id } => {
            service.delete_slot(slot_id, ctx.token()).await?;
            println!("Janela removida.");
        }
    }
    Ok(())
}
