/*!
 * Property Tests
 * FIFO order, size consistency and agreement between the two variants
 */

use alarm_queue::{AlarmQueue, MessageKind, QueueError, SeqAlarmQueue};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Send(MessageKind, u16),
    Recv,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(|v| Op::Send(MessageKind::Normal, v)),
        1 => any::<u16>().prop_map(|v| Op::Send(MessageKind::Alarm, v)),
        2 => Just(Op::Recv),
    ]
}

proptest! {
    #[test]
    fn prop_normals_come_out_in_send_order(values in prop::collection::vec(any::<u32>(), 0..200)) {
        let queue = AlarmQueue::new();
        for v in &values {
            queue.send(*v, MessageKind::Normal).unwrap();
        }
        prop_assert_eq!(queue.size(), values.len());

        let received: Vec<u32> = values.iter().map(|_| queue.recv().payload).collect();
        prop_assert_eq!(received, values);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn prop_variants_agree_when_nothing_blocks(ops in prop::collection::vec(op_strategy(), 0..300)) {
        let blocking = AlarmQueue::new();
        let mut sequential = SeqAlarmQueue::new();
        let mut normals = 0usize;

        for op in ops {
            match op {
                Op::Send(kind, value) => {
                    if kind.is_alarm() && blocking.alarms_pending() == 1 {
                        // The blocking variant would park here
                        prop_assert_eq!(sequential.send(value, kind), Err(QueueError::NoRoom));
                        continue;
                    }
                    prop_assert_eq!(blocking.send(value, kind), Ok(()));
                    prop_assert_eq!(sequential.send(value, kind), Ok(()));
                    if !kind.is_alarm() {
                        normals += 1;
                    }
                }
                Op::Recv => {
                    let had_alarm = blocking.alarms_pending() == 1;
                    match (blocking.try_recv(), sequential.recv()) {
                        (None, Err(QueueError::NoMessage)) => {}
                        (Some(a), Ok(b)) => {
                            // Priority rule: a pending alarm always goes first
                            prop_assert_eq!(a.kind.is_alarm(), had_alarm);
                            if !a.kind.is_alarm() {
                                normals -= 1;
                            }
                            prop_assert_eq!(a, b);
                        }
                        (a, b) => prop_assert!(false, "variants disagree: {:?} vs {:?}", a, b),
                    }
                }
            }

            prop_assert_eq!(blocking.size(), blocking.alarms_pending() + normals);
            prop_assert_eq!(blocking.size(), sequential.size());
            prop_assert_eq!(blocking.alarms_pending(), sequential.alarms_pending());
        }
    }
}
