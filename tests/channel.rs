mod tests {
    use embassy_time::Duration;
    use myrtio_blade::PulseChannel;
    use myrtio_blade::channel::{Channel, TryReceiveError, TrySendError};

    #[test]
    fn test_fifo_order() {
        let channel: Channel<u8, 4> = Channel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();
        sender.try_send(1).unwrap();
        sender.try_send(2).unwrap();
        sender.try_send(3).unwrap();
        assert_eq!(channel.len(), 3);
        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
        assert_eq!(receiver.try_receive(), Ok(3));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_try_send_full() {
        let channel: Channel<u8, 2> = Channel::new();
        channel.try_send(1).unwrap();
        channel.try_send(2).unwrap();
        assert_eq!(channel.try_send(3), Err(TrySendError(3)));
        assert_eq!(channel.try_receive(), Ok(1));
    }

    #[test]
    fn test_single_slot_overwrite() {
        let channel: PulseChannel<1> = PulseChannel::new();
        let sender = channel.sender();
        assert_eq!(sender.send_overwrite(Duration::from_micros(1200)), None);
        assert_eq!(
            sender.send_overwrite(Duration::from_micros(2400)),
            Some(Duration::from_micros(1200))
        );
        assert_eq!(channel.len(), 1);

        // Taking the value clears the slot
        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Ok(Duration::from_micros(2400)));
        assert!(channel.is_empty());
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_overwrite_drops_oldest() {
        let channel: Channel<u8, 3> = Channel::new();
        for value in 1..=5 {
            channel.send_overwrite(value);
        }
        assert_eq!(channel.try_receive(), Ok(3));
        assert_eq!(channel.try_receive(), Ok(4));
        assert_eq!(channel.try_receive(), Ok(5));
    }

    #[test]
    fn test_clear() {
        let channel: Channel<u8, 3> = Channel::default();
        channel.try_send(7).unwrap();
        channel.clear();
        assert!(channel.is_empty());
    }
}
