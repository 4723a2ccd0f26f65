mod tests {
    use led_modes::{ByteQueue, QueueFull};

    #[test]
    fn test_fifo_order() {
        let queue: ByteQueue<4> = ByteQueue::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        sender.try_send(b'a').unwrap();
        sender.try_send(b'b').unwrap();
        sender.try_send(b'c').unwrap();

        assert_eq!(receiver.try_receive(), Some(b'a'));
        assert_eq!(receiver.try_receive(), Some(b'b'));
        assert_eq!(receiver.try_receive(), Some(b'c'));
        assert_eq!(receiver.try_receive(), None);
    }

    #[test]
    fn test_full_queue_rejects_byte() {
        let queue: ByteQueue<2> = ByteQueue::new();

        queue.try_send(1).unwrap();
        queue.try_send(2).unwrap();
        assert_eq!(queue.try_send(3), Err(QueueFull));

        // Draining frees a slot again
        assert_eq!(queue.try_receive(), Some(1));
        queue.try_send(3).unwrap();
    }
}
