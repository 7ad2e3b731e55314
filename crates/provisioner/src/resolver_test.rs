//! Unit tests for the resolver module

#[cfg(test)]
mod tests {
    use crate::test_utils::*;
    use crate::ProvisionerError;
    use ironic_client::IronicError;

    #[tokio::test]
    async fn test_get_node_empty_id_makes_no_call() {
        let (mock, resolver) = setup();

        let node = resolver.get_node("").await.unwrap();

        assert!(node.is_none());
        assert!(mock.calls().is_empty(), "empty ID must not reach Ironic");
    }

    #[tokio::test]
    async fn test_get_node_found() {
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-1", Some("worker-0")));

        let node = resolver.get_node("uuid-1").await.unwrap().unwrap();

        assert_eq!(node.uuid(), "uuid-1");
        assert_eq!(node.name(), Some("worker-0"));
        assert_eq!(node.provision_state(), "manageable");
    }

    #[tokio::test]
    async fn test_get_node_missing_is_none_but_assert_fails() {
        let (_mock, resolver) = setup();

        assert!(resolver.get_node("ghost").await.unwrap().is_none());

        let err = resolver.assert_node("ghost").await.unwrap_err();
        assert!(matches!(err, ProvisionerError::NodeNotFound { ref id } if id == "ghost"));
        assert_eq!(err.to_string(), "failed to find node by ID ghost: not found");
    }

    #[tokio::test]
    async fn test_assert_node_empty_id_fails() {
        let (mock, resolver) = setup();

        let err = resolver.assert_node("").await.unwrap_err();

        assert!(matches!(err, ProvisionerError::NodeNotFound { .. }));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_node_other_failure_is_wrapped_with_id() {
        let (mock, resolver) = setup();
        mock.fail_get_node("uuid-1", "database locked");

        let err = resolver.get_node("uuid-1").await.unwrap_err();

        assert!(matches!(err, ProvisionerError::NodeLookup { ref id, .. } if id == "uuid-1"));
        assert_eq!(
            err.to_string(),
            "failed to find node by ID uuid-1: Ironic API error (500): database locked"
        );
    }

    #[tokio::test]
    async fn test_assert_node_passes_lookup_errors_through() {
        let (mock, resolver) = setup();
        mock.fail_get_node("uuid-1", "database locked");

        let err = resolver.assert_node("uuid-1").await.unwrap_err();
        assert!(matches!(err, ProvisionerError::NodeLookup { .. }));
    }

    #[tokio::test]
    async fn test_find_node_by_names_stops_at_first_match() {
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-b", Some("b")));
        mock.add_node(test_node("uuid-c", Some("c")));

        let node = resolver
            .find_node_by_names(&["a", "b", "c"])
            .await
            .unwrap()
            .unwrap();

        assert_eq!(node.uuid(), "uuid-b");
        assert_eq!(mock.calls(), vec!["get_node:a", "get_node:b"]);
    }

    #[tokio::test]
    async fn test_find_node_by_names_does_not_detect_duplicates() {
        // Two different nodes match two candidates; the earlier candidate
        // wins silently. This is a known non-guarantee.
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-1", Some("old-name")));
        mock.add_node(test_node("uuid-2", Some("new-name")));

        let node = resolver
            .find_node_by_names(&["new-name", "old-name"])
            .await
            .unwrap()
            .unwrap();

        assert_eq!(node.uuid(), "uuid-2");
        assert_eq!(mock.calls(), vec!["get_node:new-name"]);
    }

    #[tokio::test]
    async fn test_find_node_by_names_none_match() {
        let (mock, resolver) = setup();

        let names = vec!["x".to_string(), "y".to_string()];
        let node = resolver.find_node_by_names(names.as_slice()).await.unwrap();

        assert!(node.is_none());
        assert_eq!(mock.calls(), vec!["get_node:x", "get_node:y"]);
    }

    #[tokio::test]
    async fn test_find_node_by_names_aborts_on_error() {
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-c", Some("c")));
        mock.fail_get_node("b", "timeout");

        let err = resolver
            .find_node_by_names(&["a", "b", "c"])
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisionerError::NameLookup { ref name, .. } if name == "b"));
        assert!(err.to_string().starts_with("failed to find node by name b: "));
        assert_eq!(mock.calls(), vec!["get_node:a", "get_node:b"]);
    }

    #[tokio::test]
    async fn test_find_node_by_names_skips_empty_candidates() {
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-1", Some("worker-0")));

        let node = resolver
            .find_node_by_names(&["", "worker-0"])
            .await
            .unwrap()
            .unwrap();

        assert_eq!(node.uuid(), "uuid-1");
        assert_eq!(mock.calls(), vec!["get_node:worker-0"]);
    }

    #[tokio::test]
    async fn test_find_node_by_mac_registered() {
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-n", Some("n")));
        mock.add_port("uuid-n", "aa:bb:cc:dd:ee:ff");

        let node = resolver
            .find_node_by_mac("aa:bb:cc:dd:ee:ff")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(node.uuid(), "uuid-n");
        assert_eq!(
            mock.calls(),
            vec![
                "list_ports:address=aa%3Abb%3Acc%3Add%3Aee%3Aff&fields=node_uuid",
                "get_node:uuid-n",
            ]
        );
    }

    #[tokio::test]
    async fn test_find_node_by_mac_first_port_wins() {
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-a", Some("a")));
        mock.add_node(test_node("uuid-b", Some("b")));
        mock.add_port("uuid-a", "aa:bb:cc:dd:ee:ff");
        mock.add_port("uuid-b", "aa:bb:cc:dd:ee:ff");

        let node = resolver
            .find_node_by_mac("aa:bb:cc:dd:ee:ff")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(node.uuid(), "uuid-a");
        let node_lookups: Vec<_> = mock
            .calls()
            .into_iter()
            .filter(|call| call.starts_with("get_node:"))
            .collect();
        assert_eq!(node_lookups, vec!["get_node:uuid-a"]);
    }

    #[tokio::test]
    async fn test_find_node_by_mac_unregistered() {
        let (mock, resolver) = setup();
        mock.add_node(test_node("uuid-n", None));
        mock.add_port("uuid-n", "aa:bb:cc:dd:ee:ff");

        let node = resolver.find_node_by_mac("11:22:33:44:55:66").await.unwrap();

        assert!(node.is_none());
        assert_eq!(mock.calls().len(), 1, "no node lookup without a port");
    }

    #[tokio::test]
    async fn test_find_node_by_mac_port_query_failure() {
        let (mock, resolver) = setup();
        mock.fail_list_ports("ports API down");

        let err = resolver.find_node_by_mac("aa:bb:cc:dd:ee:ff").await.unwrap_err();

        assert!(matches!(err, ProvisionerError::PortLookup { ref mac, .. } if mac == "aa:bb:cc:dd:ee:ff"));
    }

    #[tokio::test]
    async fn test_find_node_by_mac_node_lookup_failure() {
        let (mock, resolver) = setup();
        mock.add_port("uuid-n", "aa:bb:cc:dd:ee:ff");
        mock.fail_get_node("uuid-n", "conductor gone");

        let err = resolver.find_node_by_mac("aa:bb:cc:dd:ee:ff").await.unwrap_err();

        assert!(matches!(
            err.ironic_error(),
            Some(IronicError::Api { message, .. }) if message == "conductor gone"
        ));
    }

    #[tokio::test]
    async fn test_find_node_by_mac_dangling_port() {
        // Port points at a node Ironic no longer knows
        let (mock, resolver) = setup();
        mock.add_port("uuid-gone", "aa:bb:cc:dd:ee:ff");

        let node = resolver.find_node_by_mac("aa:bb:cc:dd:ee:ff").await.unwrap();
        assert!(node.is_none());
    }
}
